//! Course service - read-only lookups over the course catalog

use std::sync::Arc;

use crate::domain::{Course, CourseId, CourseRepository, DomainError};

/// Client-facing message for a failed course lookup
const COURSE_NOT_FOUND: &str = "Course not found";

/// Course service for catalog lookups
#[derive(Debug)]
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    /// List all courses in catalog order
    pub async fn list(&self) -> Result<Vec<Course>, DomainError> {
        self.repository.list().await
    }

    /// Get a course by ID, failing with NotFound if absent
    pub async fn get_required(&self, id: CourseId) -> Result<Course, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(COURSE_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::course::InMemoryCourseRepository;

    fn service() -> CourseService {
        CourseService::new(Arc::new(InMemoryCourseRepository::with_courses(vec![
            Course::new(1u32, "Calculus I", "MATH101", 4, "Dr. Williams"),
        ])))
    }

    #[tokio::test]
    async fn test_get_required_present() {
        let course = service().get_required(CourseId::new(1)).await.unwrap();
        assert_eq!(course.code, "MATH101");
    }

    #[tokio::test]
    async fn test_get_required_absent_uses_client_message() {
        let err = service().get_required(CourseId::new(9)).await.unwrap_err();
        assert_eq!(err.to_string(), "Not found: Course not found");
    }
}
