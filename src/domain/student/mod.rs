//! Student domain - entities and repository trait

pub mod entity;
pub mod repository;

pub use entity::{Student, StudentDraft, StudentId};
pub use repository::StudentRepository;
