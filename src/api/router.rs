use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::courses;
use super::health;
use super::state::AppState;
use super::stats;
use super::students;

/// Create the full router with application state.
///
/// CORS is wide open so the workshop frontend can connect from any origin.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Landing and health endpoints
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Student CRUD
        .route("/students", get(students::list_students))
        .route("/students", post(students::create_student))
        .route("/students/{student_id}", get(students::get_student))
        .route("/students/{student_id}", put(students::update_student))
        .route("/students/{student_id}", delete(students::delete_student))
        // Course catalog (read-only)
        .route("/courses", get(courses::list_courses))
        .route("/courses/{course_id}", get(courses::get_course))
        // Statistics
        .route("/stats", get(stats::get_stats))
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
