//! Domain layer - Core entities and repository traits

pub mod course;
pub mod error;
pub mod stats;
pub mod student;

pub use course::{Course, CourseId, CourseRepository};
pub use error::DomainError;
pub use stats::UniversityStats;
pub use student::{Student, StudentDraft, StudentId, StudentRepository};
