//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, engine.engine_id)
///     .name("Corolla")
///     .brand("Toyota")
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    engine_id: Uuid,
    name: String,
    year: String,
    brand: String,
    fuel_type: String,
    price: f64,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Car {id}"` where id is auto-incremented
    /// - year: `"2020"`
    /// - brand: `"Toyota"`
    /// - fuel_type: `"Petrol"`
    /// - price: `20000.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `engine_id` - Engine the car references
    pub fn new(db: &'a DatabaseConnection, engine_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            engine_id,
            name: format!("Car {}", id),
            year: "2020".to_string(),
            brand: "Toyota".to_string(),
            fuel_type: "Petrol".to_string(),
            price: 20000.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert, including a missing engine
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();

        entity::car::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            year: ActiveValue::Set(self.year),
            brand: ActiveValue::Set(self.brand),
            fuel_type: ActiveValue::Set(self.fuel_type),
            engine_id: ActiveValue::Set(self.engine_id),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values referencing the given engine.
///
/// Shorthand for `CarFactory::new(db, engine_id).build().await`.
pub async fn create_car(
    db: &DatabaseConnection,
    engine_id: Uuid,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, engine_id).build().await
}
