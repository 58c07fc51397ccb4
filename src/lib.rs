//! University Workshop API
//!
//! A small demonstration REST API for container deployment workshops:
//! - CRUD over an in-memory student collection
//! - A read-only course catalog
//! - Derived statistics over both collections
//!
//! Nothing persists across restarts; both collections are seeded at startup.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{Course, Student};
use infrastructure::services::{CourseService, StatsService, StudentService};
use infrastructure::{InMemoryCourseRepository, InMemoryStudentRepository};

/// Create the application state with seeded in-memory repositories
pub fn create_app_state() -> AppState {
    let student_repository: Arc<InMemoryStudentRepository> = Arc::new(
        InMemoryStudentRepository::with_students(default_students()),
    );
    let course_repository: Arc<InMemoryCourseRepository> = Arc::new(
        InMemoryCourseRepository::with_courses(default_courses()),
    );

    let stats_service = StatsService::new(student_repository.clone(), course_repository.clone());

    AppState {
        student_service: Arc::new(StudentService::new(student_repository)),
        course_service: Arc::new(CourseService::new(course_repository)),
        stats_service: Arc::new(stats_service),
    }
}

fn default_students() -> Vec<Student> {
    vec![
        Student::new(
            1u32,
            "Alice Johnson",
            "alice.johnson@university.edu",
            "Computer Science",
            3,
        ),
        Student::new(
            2u32,
            "Bob Smith",
            "bob.smith@university.edu",
            "Mathematics",
            2,
        ),
        Student::new(
            3u32,
            "Carol Williams",
            "carol.williams@university.edu",
            "Physics",
            4,
        ),
        Student::new(
            4u32,
            "David Brown",
            "david.brown@university.edu",
            "Engineering",
            1,
        ),
        Student::new(
            5u32,
            "Eva Davis",
            "eva.davis@university.edu",
            "Computer Science",
            2,
        ),
    ]
}

fn default_courses() -> Vec<Course> {
    vec![
        Course::new(1u32, "Introduction to Programming", "CS101", 3, "Dr. Smith"),
        Course::new(2u32, "Data Structures", "CS201", 4, "Dr. Johnson"),
        Course::new(3u32, "Calculus I", "MATH101", 4, "Dr. Williams"),
        Course::new(4u32, "Physics I", "PHYS101", 3, "Dr. Brown"),
        Course::new(5u32, "Software Engineering", "CS301", 3, "Dr. Davis"),
    ]
}
