//! Bearer token authentication for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{error::auth::AuthError, state::AppState};

/// Identity of the caller, inserted into request extensions by `require_auth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Rejects requests to protected routes that lack a valid bearer token.
///
/// Applied with `axum::middleware::from_fn_with_state` as a route layer, so it only
/// runs for matched protected routes and short-circuits before the handler.
///
/// # Returns
/// - `Ok(Response)` - Token valid; response of the wrapped handler
/// - `Err(AuthError)` - Header missing, malformed, signed with another key or expired
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(request.headers()).inspect_err(|e| {
        tracing::warn!(error = %e, "Authentication failed: missing or malformed header");
    })?;

    let claims = state.tokens.verify(token).inspect_err(|e| {
        tracing::warn!(error = %e, "Authentication failed: token rejected");
    })?;

    tracing::debug!(subject = %claims.sub, "Authenticated request");

    request
        .extensions_mut()
        .insert(AuthenticatedUser {
            subject: claims.sub,
        });

    Ok(next.run(request).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthorizationHeader)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationScheme)?;
    if value.is_empty() {
        return Err(AuthError::MissingAuthorizationHeader);
    }

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthorizationScheme)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::InvalidAuthorizationScheme);
    }

    Ok(token)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::MissingAuthorizationHeader)
    }
}
