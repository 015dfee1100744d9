use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::{credential::StaticCredentialStore, token::TokenService},
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "info,carzone=debug,tower_http=debug";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set and falls back to debug output for this
/// crate and for request tracing.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `engine` and `car` tables exist before the
/// first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!("Connected to database");

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Builds the shared handler state from configuration and an open connection.
pub fn build_state(config: &Config, db: sea_orm::DatabaseConnection) -> AppState {
    if config.default_credentials {
        tracing::warn!(
            "AUTH_USERNAME or AUTH_PASSWORD is not set, falling back to the default credentials for {}",
            config.auth_username
        );
    }

    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiry);
    tracing::info!("Issuing tokens valid for {} hours", tokens.expiry().num_hours());
    let credentials = StaticCredentialStore::new(&config.auth_username, &config.auth_password);

    AppState::new(db, tokens, Arc::new(credentials))
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
