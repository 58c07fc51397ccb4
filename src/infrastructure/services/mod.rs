//! Service layer wrapping the repositories

pub mod course_service;
pub mod stats_service;
pub mod student_service;

pub use course_service::CourseService;
pub use stats_service::StatsService;
pub use student_service::StudentService;
