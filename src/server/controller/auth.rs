use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange username and password for a bearer token.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the credential store and token service
/// - `payload` - Login credentials
///
/// # Returns
/// - `200 OK` - Signed token valid for the configured expiry window
/// - `400 Bad Request` - Body is not a valid login request
/// - `401 Unauthorized` - Credentials rejected
/// - `500 Internal Server Error` - Token could not be signed
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 400, description = "Malformed login request", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<Json<TokenDto>, AppError> {
    let Json(payload) = payload?;

    let token = AuthService::new(state.credentials.as_ref(), &state.tokens)
        .login(&payload.username, &payload.password)?;

    Ok(Json(TokenDto { token }))
}
