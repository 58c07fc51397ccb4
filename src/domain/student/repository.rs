//! Student repository trait

use async_trait::async_trait;

use super::{Student, StudentDraft, StudentId};
use crate::domain::DomainError;

/// Repository trait for Student persistence
#[async_trait]
pub trait StudentRepository: Send + Sync + std::fmt::Debug {
    /// Get all students in insertion order
    async fn list(&self) -> Result<Vec<Student>, DomainError>;

    /// Get a student by ID
    async fn get(&self, id: StudentId) -> Result<Option<Student>, DomainError>;

    /// Create a new student with a repository-assigned ID
    async fn create(&self, draft: StudentDraft) -> Result<Student, DomainError>;

    /// Replace all fields of an existing student, keeping its ID and position
    async fn update(&self, id: StudentId, draft: StudentDraft) -> Result<Student, DomainError>;

    /// Delete a student by ID; returns whether a record was removed
    async fn delete(&self, id: StudentId) -> Result<bool, DomainError>;

    /// Number of students currently stored
    async fn count(&self) -> Result<usize, DomainError>;
}
