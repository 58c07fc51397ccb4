//! Statistics endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::UniversityStats;

/// GET /stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<UniversityStats>, ApiError> {
    debug!("Computing statistics");

    let stats = state.stats_service.stats().await.map_err(ApiError::from)?;

    Ok(Json(stats))
}
