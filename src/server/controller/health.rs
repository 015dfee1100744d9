use axum::{extract::State, http::StatusCode, Json};

use crate::{model::api::HealthDto, server::state::AppState};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report service and database liveness.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy", body = HealthDto),
        (status = 503, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthDto>) {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
                database: "up".to_string(),
            }),
        ),
        Err(err) => {
            tracing::error!("Database health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "unavailable".to_string(),
                    database: "down".to_string(),
                }),
            )
        }
    }
}
