//! Engine domain model and write parameters.

use uuid::Uuid;

use crate::model::engine::EngineDto;

/// Engine as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub engine_id: Uuid,
    /// Displacement in cubic centimetres.
    pub displacement: i32,
    pub no_of_cylinders: i32,
    /// Range in kilometres.
    pub car_range: i32,
}

impl Engine {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::engine::Model) -> Self {
        Self {
            engine_id: entity.engine_id,
            displacement: entity.displacement,
            no_of_cylinders: entity.no_of_cylinders,
            car_range: entity.car_range,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> EngineDto {
        EngineDto {
            engine_id: self.engine_id,
            displacement: self.displacement,
            no_of_cylinders: self.no_of_cylinders,
            car_range: self.car_range,
        }
    }
}

/// Validated engine fields for create and update operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineParams {
    pub displacement: i32,
    pub no_of_cylinders: i32,
    pub car_range: i32,
}
