use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the data layer.
///
/// Not-found outcomes are separate variants so callers can branch on them instead of
/// inspecting `DbErr`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No row matched the lookup condition.
    ///
    /// Holds the table name of the entity that was looked up.
    #[error("{0} not found")]
    NotFound(String),

    /// A car write referenced an engine that does not exist.
    #[error("engine not found")]
    EngineNotFound(Uuid),

    /// An engine delete was refused because cars still reference it.
    #[error("engine {engine_id} is still referenced by {cars} car(s)")]
    EngineInUse { engine_id: Uuid, cars: u64 },

    #[error(transparent)]
    DbErr(#[from] DbErr),
}
