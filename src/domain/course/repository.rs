//! Course repository trait
//!
//! Courses expose no mutation operations; the catalog is fixed at startup.

use async_trait::async_trait;

use super::{Course, CourseId};
use crate::domain::DomainError;

/// Read-only repository trait for Course lookup
#[async_trait]
pub trait CourseRepository: Send + Sync + std::fmt::Debug {
    /// Get all courses in catalog order
    async fn list(&self) -> Result<Vec<Course>, DomainError>;

    /// Get a course by ID
    async fn get(&self, id: CourseId) -> Result<Option<Course>, DomainError>;

    /// Number of courses in the catalog
    async fn count(&self) -> Result<usize, DomainError>;
}
