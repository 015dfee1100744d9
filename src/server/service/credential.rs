//! Username/password verification backends.

/// Source of truth for login credentials.
///
/// `AuthService` holds one behind a trait object so the backend can be swapped
/// without touching the login handler.
pub trait CredentialStore: Send + Sync {
    /// Returns whether `password` is correct for `username`.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Single account configured at startup.
pub struct StaticCredentialStore {
    username: String,
    password: String,
}

impl StaticCredentialStore {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialStore for StaticCredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
