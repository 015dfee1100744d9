use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EngineDto {
    pub engine_id: Uuid,
    pub displacement: i32,
    pub no_of_cylinders: i32,
    pub car_range: i32,
}

/// Body of engine create and update requests.
///
/// Missing fields default to zero so that they are reported by validation rather than
/// rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EngineRequestDto {
    pub displacement: i32,
    pub no_of_cylinders: i32,
    pub car_range: i32,
}
