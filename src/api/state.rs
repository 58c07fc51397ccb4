//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    Course, CourseId, DomainError, Student, StudentDraft, StudentId, UniversityStats,
};
use crate::infrastructure::services::{CourseService, StatsService, StudentService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<dyn StudentServiceTrait>,
    pub course_service: Arc<dyn CourseServiceTrait>,
    pub stats_service: Arc<dyn StatsServiceTrait>,
}

/// Trait for student service operations
#[async_trait::async_trait]
pub trait StudentServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Student>, DomainError>;
    async fn get(&self, id: StudentId) -> Result<Student, DomainError>;
    async fn create(&self, draft: StudentDraft) -> Result<Student, DomainError>;
    async fn update(&self, id: StudentId, draft: StudentDraft) -> Result<Student, DomainError>;
    async fn delete(&self, id: StudentId) -> Result<(), DomainError>;
}

/// Trait for course service operations
#[async_trait::async_trait]
pub trait CourseServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, DomainError>;
    async fn get(&self, id: CourseId) -> Result<Course, DomainError>;
}

/// Trait for stats service operations
#[async_trait::async_trait]
pub trait StatsServiceTrait: Send + Sync {
    async fn stats(&self) -> Result<UniversityStats, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl StudentServiceTrait for StudentService {
    async fn list(&self) -> Result<Vec<Student>, DomainError> {
        StudentService::list(self).await
    }

    async fn get(&self, id: StudentId) -> Result<Student, DomainError> {
        StudentService::get_required(self, id).await
    }

    async fn create(&self, draft: StudentDraft) -> Result<Student, DomainError> {
        StudentService::create(self, draft).await
    }

    async fn update(&self, id: StudentId, draft: StudentDraft) -> Result<Student, DomainError> {
        StudentService::update(self, id, draft).await
    }

    async fn delete(&self, id: StudentId) -> Result<(), DomainError> {
        StudentService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl CourseServiceTrait for CourseService {
    async fn list(&self) -> Result<Vec<Course>, DomainError> {
        CourseService::list(self).await
    }

    async fn get(&self, id: CourseId) -> Result<Course, DomainError> {
        CourseService::get_required(self, id).await
    }
}

#[async_trait::async_trait]
impl StatsServiceTrait for StatsService {
    async fn stats(&self) -> Result<UniversityStats, DomainError> {
        StatsService::stats(self).await
    }
}
