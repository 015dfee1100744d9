//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an engine and a car referencing it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((engine, car))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_engine(
    db: &DatabaseConnection,
) -> Result<(entity::engine::Model, entity::car::Model), DbErr> {
    let engine = crate::factory::engine::create_engine(db).await?;
    let car = crate::factory::car::create_car(db, engine.engine_id).await?;

    Ok((engine, car))
}
