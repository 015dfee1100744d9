use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        engine::{EngineDto, EngineRequestDto},
    },
    server::{
        error::AppError, service::engine::EngineService, state::AppState, util::parse::parse_uuid,
    },
};

/// Tag for grouping engine endpoints in OpenAPI documentation
pub static ENGINE_TAG: &str = "engine";

/// Get an engine by ID.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - Engine found
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No engine with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/engines/{id}",
    tag = ENGINE_TAG,
    params(
        ("id" = String, Path, description = "Engine UUID")
    ),
    responses(
        (status = 200, description = "Engine found", body = EngineDto),
        (status = 400, description = "Invalid engine id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Engine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_engine_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EngineDto>, AppError> {
    let id = parse_uuid(&id, "engine id")?;

    let engine = EngineService::new(&state.db).get_by_id(id).await?;

    Ok(Json(engine.into_dto()))
}

/// Create an engine.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - Created engine with its generated ID
/// - `400 Bad Request` - Malformed body or a field failed validation
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/engines",
    tag = ENGINE_TAG,
    request_body = EngineRequestDto,
    responses(
        (status = 201, description = "Engine created", body = EngineDto),
        (status = 400, description = "Invalid engine data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_engine(
    State(state): State<AppState>,
    payload: Result<Json<EngineRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<EngineDto>), AppError> {
    let Json(payload) = payload?;

    let engine = EngineService::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(engine.into_dto())))
}

/// Replace every field of an engine.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - Updated engine
/// - `400 Bad Request` - Invalid ID, malformed body or a field failed validation
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No engine with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/engines/{id}",
    tag = ENGINE_TAG,
    params(
        ("id" = String, Path, description = "Engine UUID")
    ),
    request_body = EngineRequestDto,
    responses(
        (status = 200, description = "Engine updated", body = EngineDto),
        (status = 400, description = "Invalid engine data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Engine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_engine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EngineRequestDto>, JsonRejection>,
) -> Result<Json<EngineDto>, AppError> {
    let id = parse_uuid(&id, "engine id")?;
    let Json(payload) = payload?;

    let engine = EngineService::new(&state.db).update(id, &payload).await?;

    Ok(Json(engine.into_dto()))
}

/// Delete an engine.
///
/// Engines still referenced by a car cannot be deleted; delete or re-point those
/// cars first.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - The deleted engine
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No engine with this ID
/// - `409 Conflict` - Engine is still referenced by at least one car
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/engines/{id}",
    tag = ENGINE_TAG,
    params(
        ("id" = String, Path, description = "Engine UUID")
    ),
    responses(
        (status = 200, description = "Engine deleted", body = EngineDto),
        (status = 400, description = "Invalid engine id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Engine not found", body = ErrorDto),
        (status = 409, description = "Engine still in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_engine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EngineDto>, AppError> {
    let id = parse_uuid(&id, "engine id")?;

    let engine = EngineService::new(&state.db).delete(id).await?;

    Ok(Json(engine.into_dto()))
}
