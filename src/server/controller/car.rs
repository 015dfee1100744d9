use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        car::{CarDto, CarRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthenticatedUser, service::car::CarService,
        state::AppState, util::parse::parse_uuid,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BrandQuery {
    /// Embed each car's engine in the response
    #[serde(rename = "isEngine", default)]
    pub is_engine: bool,
}

/// Get a car by ID.
///
/// # Access Control
/// - Bearer token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Car UUID
///
/// # Returns
/// - `200 OK` - Car with its engine embedded
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No car with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = String, Path, description = "Car UUID")
    ),
    responses(
        (status = 200, description = "Car found", body = CarDto),
        (status = 400, description = "Invalid car id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarDto>, AppError> {
    let id = parse_uuid(&id, "car id")?;

    let car = CarService::new(&state.db).get_by_id(id).await?;

    Ok(Json(car.into_dto()))
}

/// Get all cars of a brand.
///
/// Brand matching is exact and case-sensitive.
///
/// # Access Control
/// - Bearer token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `brand` - Brand name
/// - `query` - Whether engines are embedded in the response
///
/// # Returns
/// - `200 OK` - Cars of the brand
/// - `400 Bad Request` - `isEngine` is not a boolean
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No car has this brand
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/brand/{brand}",
    tag = CAR_TAG,
    params(
        ("brand" = String, Path, description = "Brand name"),
        BrandQuery
    ),
    responses(
        (status = 200, description = "Cars of the brand", body = Vec<CarDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No cars found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_cars_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
    query: Result<Query<BrandQuery>, QueryRejection>,
) -> Result<Json<Vec<CarDto>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let cars = CarService::new(&state.db)
        .get_by_brand(&brand, query.is_engine)
        .await?;

    Ok(Json(cars.into_iter().map(|car| car.into_dto()).collect()))
}

/// Create a car.
///
/// The referenced engine must already exist.
///
/// # Access Control
/// - Bearer token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - Authenticated caller
/// - `payload` - Car fields
///
/// # Returns
/// - `201 Created` - Created car with its engine embedded
/// - `400 Bad Request` - Malformed body or a field failed validation
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `422 Unprocessable Entity` - Referenced engine does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/cars",
    tag = CAR_TAG,
    request_body = CarRequestDto,
    responses(
        (status = 201, description = "Car created", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Engine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_car(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<CarRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CarDto>), AppError> {
    let Json(payload) = payload?;

    let car = CarService::new(&state.db).create(&payload).await?;
    tracing::debug!(subject = %user.subject, car_id = %car.id, "Car created by user");

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// Replace every field of a car.
///
/// # Access Control
/// - Bearer token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Car UUID
/// - `payload` - New car fields
///
/// # Returns
/// - `200 OK` - Updated car with its engine embedded
/// - `400 Bad Request` - Invalid ID, malformed body or a field failed validation
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No car with this ID
/// - `422 Unprocessable Entity` - Referenced engine does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = String, Path, description = "Car UUID")
    ),
    request_body = CarRequestDto,
    responses(
        (status = 200, description = "Car updated", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 422, description = "Engine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CarRequestDto>, JsonRejection>,
) -> Result<Json<CarDto>, AppError> {
    let id = parse_uuid(&id, "car id")?;
    let Json(payload) = payload?;

    let car = CarService::new(&state.db).update(id, &payload).await?;

    Ok(Json(car.into_dto()))
}

/// Delete a car.
///
/// # Access Control
/// - Bearer token required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Car UUID
///
/// # Returns
/// - `200 OK` - The deleted car
/// - `400 Bad Request` - ID is not a UUID
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No car with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = String, Path, description = "Car UUID")
    ),
    responses(
        (status = 200, description = "Car deleted", body = CarDto),
        (status = 400, description = "Invalid car id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarDto>, AppError> {
    let id = parse_uuid(&id, "car id")?;

    let car = CarService::new(&state.db).delete(id).await?;

    Ok(Json(car.into_dto()))
}
