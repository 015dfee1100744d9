use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_AUTH_USERNAME: &str = "admin";
const DEFAULT_AUTH_PASSWORD: &str = "password";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,
    pub jwt_expiry: Duration,

    pub auth_username: String,
    pub auth_password: String,
    /// Set when either login credential fell back to its default.
    pub default_credentials: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` wins when set; otherwise a Postgres URL is assembled from
    /// `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS` and `DB_NAME`, all of which are then
    /// required. A missing, invalid or non-positive `JWT_EXPIRY_TIME` falls back to
    /// 24 hours.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                require("DB_USER")?,
                require("DB_PASS")?,
                require("DB_HOST")?,
                require("DB_PORT")?,
                require("DB_NAME")?,
            ),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let expiry_hours = lookup("JWT_EXPIRY_TIME")
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(DEFAULT_JWT_EXPIRY_HOURS);

        let username = lookup("AUTH_USERNAME").filter(|value| !value.is_empty());
        let password = lookup("AUTH_PASSWORD").filter(|value| !value.is_empty());
        let default_credentials = username.is_none() || password.is_none();

        Ok(Self {
            database_url,
            port,
            jwt_secret: require("JWT_SECRET")?,
            jwt_expiry: Duration::hours(expiry_hours),
            auth_username: username.unwrap_or_else(|| DEFAULT_AUTH_USERNAME.to_string()),
            auth_password: password.unwrap_or_else(|| DEFAULT_AUTH_PASSWORD.to_string()),
            default_credentials,
        })
    }
}
