use crate::server::{
    data::car::CarRepository,
    error::repository::RepositoryError,
    model::car::{CarParams, FuelType},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_brand;
mod get_by_id;
mod update;

fn params(engine_id: Uuid) -> CarParams {
    CarParams {
        name: "X".to_string(),
        year: 2020,
        brand: "Toyota".to_string(),
        fuel_type: FuelType::Petrol,
        engine_id,
        price: 20000.0,
    }
}
