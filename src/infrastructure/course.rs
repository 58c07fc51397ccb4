//! In-memory implementation of CourseRepository

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Course, CourseId, CourseRepository, DomainError};

/// In-memory implementation of CourseRepository. The catalog is fixed at
/// construction; the trait exposes no mutation.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<Vec<Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Course>>, DomainError> {
        self.courses
            .lock()
            .map_err(|_| DomainError::internal("course repository lock poisoned"))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        Ok(self.lock()?.clone())
    }

    async fn get(&self, id: CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.lock()?.iter().find(|c| c.id == id).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryCourseRepository {
        InMemoryCourseRepository::with_courses(vec![
            Course::new(1u32, "Introduction to Programming", "CS101", 3, "Dr. Smith"),
            Course::new(2u32, "Data Structures", "CS201", 4, "Dr. Johnson"),
        ])
    }

    #[tokio::test]
    async fn test_list_returns_catalog_order() {
        let repo = seeded();
        let courses = repo.list().await.unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].code, "CS101");
        assert_eq!(courses[1].code, "CS201");
    }

    #[tokio::test]
    async fn test_get_present_and_absent() {
        let repo = seeded();

        let course = repo.get(CourseId::new(2)).await.unwrap().unwrap();
        assert_eq!(course.name, "Data Structures");

        assert!(repo.get(CourseId::new(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_matches_catalog_size() {
        assert_eq!(seeded().count().await.unwrap(), 2);
        assert_eq!(InMemoryCourseRepository::new().count().await.unwrap(), 0);
    }
}
