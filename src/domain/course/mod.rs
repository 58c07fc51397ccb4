//! Course domain - entities and repository trait

pub mod entity;
pub mod repository;

pub use entity::{Course, CourseId};
pub use repository::CourseRepository;
