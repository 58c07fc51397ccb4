//! Course endpoints - read-only catalog access

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Course, CourseId};

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    debug!("Listing all courses");

    let courses = state.course_service.list().await.map_err(ApiError::from)?;

    Ok(Json(courses))
}

/// GET /courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<u32>,
) -> Result<Json<Course>, ApiError> {
    debug!(course_id, "Getting course");

    let course = state
        .course_service
        .get(CourseId::new(course_id))
        .await
        .map_err(ApiError::from)?;

    Ok(Json(course))
}
