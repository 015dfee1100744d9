//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{credential::CredentialStore, token::TokenService};

/// Shared resources handed to every handler through Axum's state extraction.
///
/// All fields are cheap to clone: the database connection is a pool handle, the
/// token service holds only keys and a duration, and the credential store sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signs tokens at login and verifies them in the auth middleware.
    pub tokens: TokenService,

    /// Backend checking login credentials.
    pub credentials: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            db,
            tokens,
            credentials,
        }
    }
}
