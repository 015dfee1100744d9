//! Engine factory for creating test engine entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test engines with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::engine::EngineFactory;
///
/// let engine = EngineFactory::new(&db)
///     .displacement(2000)
///     .no_of_cylinders(6)
///     .build()
///     .await?;
/// ```
pub struct EngineFactory<'a> {
    db: &'a DatabaseConnection,
    engine_id: Uuid,
    displacement: i32,
    no_of_cylinders: i32,
    car_range: i32,
}

impl<'a> EngineFactory<'a> {
    /// Creates a new EngineFactory with default values.
    ///
    /// Defaults:
    /// - engine_id: random UUID v4
    /// - displacement: `1500`
    /// - no_of_cylinders: `4`
    /// - car_range: `500`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            engine_id: Uuid::new_v4(),
            displacement: 1500,
            no_of_cylinders: 4,
            car_range: 500,
        }
    }

    pub fn engine_id(mut self, engine_id: Uuid) -> Self {
        self.engine_id = engine_id;
        self
    }

    pub fn displacement(mut self, displacement: i32) -> Self {
        self.displacement = displacement;
        self
    }

    pub fn no_of_cylinders(mut self, no_of_cylinders: i32) -> Self {
        self.no_of_cylinders = no_of_cylinders;
        self
    }

    pub fn car_range(mut self, car_range: i32) -> Self {
        self.car_range = car_range;
        self
    }

    /// Builds and inserts the engine entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::engine::Model)` - Created engine entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::engine::Model, DbErr> {
        entity::engine::ActiveModel {
            engine_id: ActiveValue::Set(self.engine_id),
            displacement: ActiveValue::Set(self.displacement),
            no_of_cylinders: ActiveValue::Set(self.no_of_cylinders),
            car_range: ActiveValue::Set(self.car_range),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an engine with default values.
///
/// Shorthand for `EngineFactory::new(db).build().await`.
pub async fn create_engine(db: &DatabaseConnection) -> Result<entity::engine::Model, DbErr> {
    EngineFactory::new(db).build().await
}
