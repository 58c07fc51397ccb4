//! Stats service - derived statistics over both collections

use std::sync::Arc;

use crate::domain::{CourseRepository, DomainError, StudentRepository, UniversityStats};

/// Stats service computing aggregate counts on demand. Statistics carry no
/// state of their own; every call reads the live collections.
#[derive(Debug)]
pub struct StatsService {
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl StatsService {
    pub fn new(students: Arc<dyn StudentRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { students, courses }
    }

    /// Compute current statistics
    pub async fn stats(&self) -> Result<UniversityStats, DomainError> {
        let students = self.students.list().await?;
        let courses = self.courses.list().await?;

        Ok(UniversityStats::compute(&students, &courses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, Student, StudentDraft};
    use crate::infrastructure::course::InMemoryCourseRepository;
    use crate::infrastructure::student::InMemoryStudentRepository;

    fn fixtures() -> (Arc<InMemoryStudentRepository>, StatsService) {
        let students = Arc::new(InMemoryStudentRepository::with_students(vec![
            Student::new(1u32, "Alice", "alice@university.edu", "CS", 3),
            Student::new(2u32, "Bob", "bob@university.edu", "Math", 2),
        ]));
        let courses = Arc::new(InMemoryCourseRepository::with_courses(vec![
            Course::new(1u32, "Calculus I", "MATH101", 4, "Dr. Williams"),
        ]));

        let service = StatsService::new(students.clone(), courses);
        (students, service)
    }

    #[tokio::test]
    async fn test_stats_reflect_seeded_collections() {
        let (_, service) = fixtures();
        let stats = service.stats().await.unwrap();

        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.total_courses, 1);
        assert_eq!(stats.students_by_major.get("CS"), Some(&1));
        assert_eq!(stats.students_by_major.get("Math"), Some(&1));
        assert_eq!(stats.students_by_year.get(&3), Some(&1));
        assert_eq!(stats.students_by_year.get(&2), Some(&1));
    }

    #[tokio::test]
    async fn test_stats_track_live_mutations() {
        let (students, service) = fixtures();

        students
            .create(StudentDraft::new("Carol", "carol@university.edu", "CS", 3))
            .await
            .unwrap();

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_students, 3);
        assert_eq!(stats.students_by_major.get("CS"), Some(&2));
        assert_eq!(stats.students_by_year.get(&3), Some(&2));
    }
}
