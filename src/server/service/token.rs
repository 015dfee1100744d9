//! Issuing and verifying HS256 bearer tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs and verifies tokens with a shared secret.
///
/// Expiry is checked against an explicit clock instead of inside `jsonwebtoken`, which
/// applies a default leeway; `verify_at` lets tests pin the current time.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl TokenService {
    pub fn new(secret: &str, expiry: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry,
        }
    }

    /// Lifetime of newly issued tokens.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Issues a token for `subject` valid from now until now + expiry.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issues a token as if the current time were `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.expiry).timestamp(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verifies signature, algorithm and expiry of `token` against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` as if the current time were `now`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature valid and `now` is before `exp`
    /// - `Err(AuthError::TokenExpired)` - Signature valid but `now >= exp`
    /// - `Err(AuthError::InvalidToken)` - Malformed token, wrong algorithm or bad signature
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}
