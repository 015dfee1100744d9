//! Car domain models and write parameters.
//!
//! `Car` is the read model returned by the data layer, optionally carrying its engine
//! when the association was eagerly loaded. `CarParams` holds request fields that have
//! passed validation, with the year and engine reference already parsed.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::{model::car::CarDto, server::model::engine::Engine};

/// Fuel types a car can be registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }

    /// Parses the stored or requested name of a fuel type.
    ///
    /// Matching is exact; `"petrol"` is not accepted.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|fuel| fuel.as_str() == value)
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Car with its engine association when loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine_id: Uuid,
    pub engine: Option<Engine>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The car entity from the database
    /// - `engine` - Engine entity when the association was loaded, `None` otherwise
    ///
    /// # Returns
    /// - `Car` - Domain model carrying the engine if one was provided
    pub fn from_entity(entity: entity::car::Model, engine: Option<entity::engine::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
            brand: entity.brand,
            fuel_type: entity.fuel_type,
            engine_id: entity.engine_id,
            engine: engine.map(Engine::from_entity),
            price: entity.price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            name: self.name,
            year: self.year,
            brand: self.brand,
            fuel_type: self.fuel_type,
            engine_id: self.engine_id,
            engine: self.engine.map(Engine::into_dto),
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated car fields for create and update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct CarParams {
    pub name: String,
    pub year: i32,
    pub brand: String,
    pub fuel_type: FuelType,
    pub engine_id: Uuid,
    pub price: f64,
}
