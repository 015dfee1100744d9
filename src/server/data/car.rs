use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection};
use uuid::Uuid;

use crate::server::{
    data::repository::Repository,
    error::repository::RepositoryError,
    model::car::{Car, CarParams},
};

pub struct CarRepository<'a> {
    cars: Repository<'a, entity::prelude::Car>,
    engines: Repository<'a, entity::prelude::Engine>,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            cars: Repository::new(db),
            engines: Repository::new(db),
        }
    }

    /// Gets a car by ID with its engine loaded
    pub async fn get_by_id(&self, id: Uuid) -> Result<Car, RepositoryError> {
        let (car, engine) = self
            .cars
            .get_with_related(entity::prelude::Engine, entity::car::Column::Id.eq(id))
            .await?;

        Ok(Car::from_entity(car, engine))
    }

    /// Gets all cars of a brand, loading engines only when `include_engine` is set
    pub async fn get_by_brand(
        &self,
        brand: &str,
        include_engine: bool,
    ) -> Result<Vec<Car>, RepositoryError> {
        let condition = entity::car::Column::Brand.eq(brand);

        let cars = if include_engine {
            self.cars
                .find_with_related(entity::prelude::Engine, condition)
                .await?
                .into_iter()
                .map(|(car, engine)| Car::from_entity(car, engine))
                .collect()
        } else {
            self.cars
                .find(condition)
                .await?
                .into_iter()
                .map(|car| Car::from_entity(car, None))
                .collect()
        };

        Ok(cars)
    }

    /// Creates a car referencing an existing engine and returns it with the engine loaded
    pub async fn create(&self, params: CarParams) -> Result<Car, RepositoryError> {
        self.resolve_engine(params.engine_id).await?;

        let now = Utc::now();
        let car = self
            .cars
            .create(entity::car::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(params.name),
                year: ActiveValue::Set(params.year.to_string()),
                brand: ActiveValue::Set(params.brand),
                fuel_type: ActiveValue::Set(params.fuel_type.to_string()),
                engine_id: ActiveValue::Set(params.engine_id),
                price: ActiveValue::Set(params.price),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .await?;

        self.get_by_id(car.id).await
    }

    /// Overwrites every mutable field of a car and returns it with the engine loaded.
    ///
    /// The new engine reference is resolved before anything is written, so a missing
    /// engine leaves the stored car unchanged.
    pub async fn update(&self, id: Uuid, params: CarParams) -> Result<Car, RepositoryError> {
        let existing = self.cars.get(entity::car::Column::Id.eq(id)).await?;

        self.resolve_engine(params.engine_id).await?;

        self.cars
            .update(entity::car::Model {
                id: existing.id,
                name: params.name,
                year: params.year.to_string(),
                brand: params.brand,
                fuel_type: params.fuel_type.to_string(),
                engine_id: params.engine_id,
                price: params.price,
                created_at: existing.created_at,
                updated_at: Utc::now(),
            })
            .await?;

        self.get_by_id(id).await
    }

    /// Deletes a car and returns the record as it was before deletion
    pub async fn delete(&self, id: Uuid) -> Result<Car, RepositoryError> {
        let (car, engine) = self
            .cars
            .get_with_related(entity::prelude::Engine, entity::car::Column::Id.eq(id))
            .await?;

        self.cars.delete(car.clone()).await?;

        Ok(Car::from_entity(car, engine))
    }

    async fn resolve_engine(&self, engine_id: Uuid) -> Result<(), RepositoryError> {
        match self
            .engines
            .get(entity::engine::Column::EngineId.eq(engine_id))
            .await
        {
            Ok(_) => Ok(()),
            Err(RepositoryError::NotFound(_)) => Err(RepositoryError::EngineNotFound(engine_id)),
            Err(err) => Err(err),
        }
    }
}
