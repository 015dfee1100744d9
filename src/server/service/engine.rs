use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::engine::EngineRequestDto,
    server::{data::engine::EngineRepository, error::AppError, model::engine::Engine, validation},
};

pub struct EngineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EngineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an engine by ID
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Engine, AppError> {
        let repo = EngineRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Validates the request and creates an engine
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, request: &EngineRequestDto) -> Result<Engine, AppError> {
        let params = validation::validate_engine(request)?;
        let repo = EngineRepository::new(self.db);

        let engine = repo.create(params).await?;
        tracing::info!(engine_id = %engine.engine_id, "Created engine");

        Ok(engine)
    }

    /// Validates the request and overwrites an existing engine
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: Uuid, request: &EngineRequestDto) -> Result<Engine, AppError> {
        let params = validation::validate_engine(request)?;
        let repo = EngineRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }

    /// Deletes an engine no car references
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<Engine, AppError> {
        let repo = EngineRepository::new(self.db);

        let engine = repo.delete(id).await?;
        tracing::info!(engine_id = %engine.engine_id, "Deleted engine");

        Ok(engine)
    }
}
