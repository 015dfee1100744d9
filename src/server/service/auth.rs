use crate::server::{
    error::{auth::AuthError, AppError},
    service::{credential::CredentialStore, token::TokenService},
};

/// Service for username/password login.
///
/// Checks credentials against the configured store and issues a bearer token for the
/// authenticated user.
pub struct AuthService<'a> {
    credentials: &'a dyn CredentialStore,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(credentials: &'a dyn CredentialStore, tokens: &'a TokenService) -> Self {
        Self {
            credentials,
            tokens,
        }
    }

    /// Authenticates a user and issues a token.
    ///
    /// # Arguments
    /// - `username` - Account name
    /// - `password` - Plain-text password as submitted
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token for `username`
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Credential store rejected the pair
    /// - `Err(AppError::AuthErr(TokenSigning))` - Token could not be signed
    #[tracing::instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        if !self.credentials.verify(username, password) {
            tracing::warn!("Rejected login attempt");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(username)?;
        tracing::info!("Issued token");

        Ok(token)
    }
}
