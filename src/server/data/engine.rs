use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection};
use uuid::Uuid;

use crate::server::{
    data::repository::Repository,
    error::repository::RepositoryError,
    model::engine::{Engine, EngineParams},
};

pub struct EngineRepository<'a> {
    engines: Repository<'a, entity::prelude::Engine>,
    cars: Repository<'a, entity::prelude::Car>,
}

impl<'a> EngineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            engines: Repository::new(db),
            cars: Repository::new(db),
        }
    }

    /// Gets an engine by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Engine, RepositoryError> {
        let engine = self
            .engines
            .get(entity::engine::Column::EngineId.eq(id))
            .await?;

        Ok(Engine::from_entity(engine))
    }

    /// Creates an engine with a freshly generated ID
    pub async fn create(&self, params: EngineParams) -> Result<Engine, RepositoryError> {
        let engine = self
            .engines
            .create(entity::engine::ActiveModel {
                engine_id: ActiveValue::Set(Uuid::new_v4()),
                displacement: ActiveValue::Set(params.displacement),
                no_of_cylinders: ActiveValue::Set(params.no_of_cylinders),
                car_range: ActiveValue::Set(params.car_range),
            })
            .await?;

        Ok(Engine::from_entity(engine))
    }

    /// Overwrites every field of an existing engine
    pub async fn update(&self, id: Uuid, params: EngineParams) -> Result<Engine, RepositoryError> {
        let existing = self
            .engines
            .get(entity::engine::Column::EngineId.eq(id))
            .await?;

        let engine = self
            .engines
            .update(entity::engine::Model {
                engine_id: existing.engine_id,
                displacement: params.displacement,
                no_of_cylinders: params.no_of_cylinders,
                car_range: params.car_range,
            })
            .await?;

        Ok(Engine::from_entity(engine))
    }

    /// Deletes an engine that no car references and returns the deleted record.
    ///
    /// # Returns
    /// - `Ok(Engine)` - Engine deleted
    /// - `Err(RepositoryError::NotFound)` - No engine with this ID
    /// - `Err(RepositoryError::EngineInUse)` - At least one car still references the engine
    pub async fn delete(&self, id: Uuid) -> Result<Engine, RepositoryError> {
        let engine = self
            .engines
            .get(entity::engine::Column::EngineId.eq(id))
            .await?;

        let cars = self
            .cars
            .count(entity::car::Column::EngineId.eq(id))
            .await?;
        if cars > 0 {
            return Err(RepositoryError::EngineInUse {
                engine_id: id,
                cars,
            });
        }

        self.engines.delete(engine.clone()).await?;

        Ok(Engine::from_entity(engine))
    }
}
