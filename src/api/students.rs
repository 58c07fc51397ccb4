//! Student endpoints - CRUD over the student collection

use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Student, StudentDraft, StudentId};

/// Student fields submitted by create and update. The id is never part of
/// the payload; create assigns one and update keeps the existing one.
#[derive(Debug, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub major: String,
    pub year: i32,
}

impl From<StudentPayload> for StudentDraft {
    fn from(payload: StudentPayload) -> Self {
        StudentDraft::new(payload.name, payload.email, payload.major, payload.year)
    }
}

/// GET /students
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    debug!("Listing all students");

    let students = state.student_service.list().await.map_err(ApiError::from)?;

    Ok(Json(students))
}

/// GET /students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<u32>,
) -> Result<Json<Student>, ApiError> {
    debug!(student_id, "Getting student");

    let student = state
        .student_service
        .get(StudentId::new(student_id))
        .await
        .map_err(ApiError::from)?;

    Ok(Json(student))
}

/// POST /students
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<Student>, ApiError> {
    debug!(name = %payload.name, "Creating student");

    let student = state
        .student_service
        .create(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(student))
}

/// PUT /students/{id}
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<u32>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<Student>, ApiError> {
    debug!(student_id, "Updating student");

    let student = state
        .student_service
        .update(StudentId::new(student_id), payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(student))
}

/// DELETE /students/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<u32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(student_id, "Deleting student");

    state
        .student_service
        .delete(StudentId::new(student_id))
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "message": "Student deleted successfully"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_payload_deserialization() {
        let json = r#"{
            "name": "Test Student",
            "email": "test@university.edu",
            "major": "Computer Science",
            "year": 2
        }"#;

        let payload: StudentPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.name, "Test Student");
        assert_eq!(payload.email, "test@university.edu");
        assert_eq!(payload.major, "Computer Science");
        assert_eq!(payload.year, 2);
    }

    #[test]
    fn test_student_payload_rejects_missing_fields() {
        let json = r#"{"name": "Test Student"}"#;
        assert!(serde_json::from_str::<StudentPayload>(json).is_err());
    }

    #[test]
    fn test_student_payload_ignores_submitted_id() {
        // Payloads never carry an id; an extra field is simply dropped
        let json = r#"{
            "id": 99,
            "name": "Test Student",
            "email": "test@university.edu",
            "major": "CS",
            "year": 1
        }"#;

        let payload: StudentPayload = serde_json::from_str(json).unwrap();
        let draft: StudentDraft = payload.into();
        assert_eq!(draft.name, "Test Student");
    }
}
