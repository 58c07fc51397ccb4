//! Infrastructure layer - repository implementations and services

pub mod course;
pub mod logging;
pub mod services;
pub mod student;

pub use course::InMemoryCourseRepository;
pub use student::InMemoryStudentRepository;
