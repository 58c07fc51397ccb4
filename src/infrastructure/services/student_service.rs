//! Student service - CRUD operations over the student collection

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, Student, StudentDraft, StudentId, StudentRepository};

/// Client-facing message for a failed student lookup
const STUDENT_NOT_FOUND: &str = "Student not found";

/// Student service for CRUD operations
#[derive(Debug)]
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    /// List all students in insertion order
    pub async fn list(&self) -> Result<Vec<Student>, DomainError> {
        self.repository.list().await
    }

    /// Get a student by ID
    pub async fn get(&self, id: StudentId) -> Result<Option<Student>, DomainError> {
        self.repository.get(id).await
    }

    /// Get a student by ID, failing with NotFound if absent
    pub async fn get_required(&self, id: StudentId) -> Result<Student, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(STUDENT_NOT_FOUND))
    }

    /// Create a student; the repository assigns the ID
    pub async fn create(&self, draft: StudentDraft) -> Result<Student, DomainError> {
        let student = self.repository.create(draft).await?;
        debug!(student_id = %student.id, "Created student");
        Ok(student)
    }

    /// Replace all fields of an existing student
    pub async fn update(&self, id: StudentId, draft: StudentDraft) -> Result<Student, DomainError> {
        let student = self
            .repository
            .update(id, draft)
            .await
            .map_err(|err| match err {
                DomainError::NotFound { .. } => DomainError::not_found(STUDENT_NOT_FOUND),
                other => other,
            })?;

        debug!(student_id = %id, "Updated student");
        Ok(student)
    }

    /// Delete a student, failing with NotFound if absent
    pub async fn delete(&self, id: StudentId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(STUDENT_NOT_FOUND));
        }

        debug!(student_id = %id, "Deleted student");
        Ok(())
    }
}
