use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::car::CarRequestDto,
    server::{data::car::CarRepository, error::AppError, model::car::Car, validation},
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a car by ID with its engine
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Car, AppError> {
        let repo = CarRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets all cars of a brand.
    ///
    /// # Arguments
    /// - `brand` - Exact brand name to match
    /// - `include_engine` - Whether each car should carry its engine
    ///
    /// # Returns
    /// - `Ok(Vec<Car>)` - At least one car of the brand
    /// - `Err(AppError::NotFound)` - No car has this brand
    #[tracing::instrument(skip(self))]
    pub async fn get_by_brand(
        &self,
        brand: &str,
        include_engine: bool,
    ) -> Result<Vec<Car>, AppError> {
        let repo = CarRepository::new(self.db);

        let cars = repo.get_by_brand(brand, include_engine).await?;
        if cars.is_empty() {
            return Err(AppError::NotFound("No cars found".to_string()));
        }

        Ok(cars)
    }

    /// Validates the request and creates a car for an existing engine
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, request: &CarRequestDto) -> Result<Car, AppError> {
        let params = validation::validate_car(request)?;
        let repo = CarRepository::new(self.db);

        let car = repo.create(params).await?;
        tracing::info!(car_id = %car.id, "Created car");

        Ok(car)
    }

    /// Validates the request and overwrites an existing car
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: Uuid, request: &CarRequestDto) -> Result<Car, AppError> {
        let params = validation::validate_car(request)?;
        let repo = CarRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }

    /// Deletes a car and returns the deleted record
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<Car, AppError> {
        let repo = CarRepository::new(self.db);

        let car = repo.delete(id).await?;
        tracing::info!(car_id = %car.id, "Deleted car");

        Ok(car)
    }
}
