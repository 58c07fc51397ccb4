//! In-memory implementation of StudentRepository

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{DomainError, Student, StudentDraft, StudentId, StudentRepository};

/// Backing store: records in insertion order plus the id counter.
#[derive(Debug, Default)]
struct StudentStore {
    records: Vec<Student>,
    next_id: u32,
}

/// In-memory implementation of StudentRepository.
///
/// Records live in a `Vec` so listing preserves insertion order. Ids come
/// from a monotonically increasing counter held next to the records; deleted
/// ids are never reused. All access goes through a single mutex, so
/// concurrent requests from the HTTP layer cannot interleave mutations.
#[derive(Debug)]
pub struct InMemoryStudentRepository {
    store: Mutex<StudentStore>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(StudentStore {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Seeds the repository; the counter starts past the highest seeded id.
    pub fn with_students(students: Vec<Student>) -> Self {
        let next_id = students
            .iter()
            .map(|s| s.id.value())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            store: Mutex::new(StudentStore {
                records: students,
                next_id,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StudentStore>, DomainError> {
        self.store
            .lock()
            .map_err(|_| DomainError::internal("student repository lock poisoned"))
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, DomainError> {
        Ok(self.lock()?.records.clone())
    }

    async fn get(&self, id: StudentId) -> Result<Option<Student>, DomainError> {
        Ok(self.lock()?.records.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, draft: StudentDraft) -> Result<Student, DomainError> {
        let mut store = self.lock()?;

        let id = StudentId::new(store.next_id);
        store.next_id += 1;

        let student = Student::from_draft(id, draft);
        store.records.push(student.clone());
        Ok(student)
    }

    async fn update(&self, id: StudentId, draft: StudentDraft) -> Result<Student, DomainError> {
        let mut store = self.lock()?;

        let slot = store
            .records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::not_found(format!("Student '{id}' not found")))?;

        *slot = Student::from_draft(id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: StudentId) -> Result<bool, DomainError> {
        let mut store = self.lock()?;

        match store.records.iter().position(|s| s.id == id) {
            Some(index) => {
                store.records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.records.len())
    }
}
