use crate::server::{
    data::engine::EngineRepository, error::repository::RepositoryError,
    model::engine::EngineParams,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_id;
mod update;

fn params() -> EngineParams {
    EngineParams {
        displacement: 1500,
        no_of_cylinders: 4,
        car_range: 500,
    }
}
