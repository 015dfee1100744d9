use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to a protected route carried no `Authorization` header.
    #[error("missing authorization header")]
    MissingAuthorizationHeader,

    /// Header present but not `Bearer <token>`, or the token is empty.
    #[error("invalid token")]
    InvalidAuthorizationScheme,

    /// Token failed to decode or its signature did not verify.
    ///
    /// The decoder's reason is kept for server-side logs only.
    #[error("invalid token")]
    InvalidToken(String),

    /// Token signature is valid but its `exp` claim is in the past.
    #[error("token expired")]
    TokenExpired,

    /// Login attempt with a username/password pair the credential store rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Server failed to sign a token.
    ///
    /// Results in a 500 Internal Server Error as this indicates a key or
    /// configuration problem rather than a client mistake.
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-side failures answer 401 with a `WWW-Authenticate: Bearer` challenge. Signing
/// failures answer 500 with a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::TokenSigning(err) => {
                tracing::error!("Failed to sign token: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                if let Self::InvalidToken(reason) = &err {
                    tracing::debug!("Rejected bearer token: {}", reason);
                }

                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
        }
    }
}
