use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::engine::EngineDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarDto {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine_id: Uuid,
    /// Present when the engine association was loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineDto>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of car create and update requests.
///
/// `year` and `engine_id` stay strings on the wire; validation parses them. Missing
/// fields default to empty values so that validation reports which one is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CarRequestDto {
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine_id: String,
    pub price: f64,
}
