//! Entity-agnostic CRUD operations shared by the domain repositories.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::IntoCondition, ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, Related,
};

use crate::server::error::repository::RepositoryError;

/// CRUD access to a single SeaORM entity.
///
/// Lookups take a condition rather than a primary key so callers can select on any
/// column. A lookup that must return a row reports `RepositoryError::NotFound`
/// carrying the entity's table name.
pub struct Repository<'a, E: EntityTrait> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> Repository<'a, E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Fetches the first row matching `condition`.
    pub async fn get<C>(&self, condition: C) -> Result<E::Model, RepositoryError>
    where
        C: IntoCondition,
    {
        E::find()
            .filter(condition)
            .one(self.db)
            .await?
            .ok_or_else(Self::not_found)
    }

    /// Fetches the first row matching `condition` together with one related entity.
    ///
    /// # Arguments
    /// - `related` - Entity to eagerly load through the `Related` relation
    /// - `condition` - Filter applied to the primary entity
    ///
    /// # Returns
    /// - `Ok((model, Some(related)))` - Row found with its related row
    /// - `Ok((model, None))` - Row found, relation empty
    /// - `Err(RepositoryError::NotFound)` - No row matched
    pub async fn get_with_related<R, C>(
        &self,
        related: R,
        condition: C,
    ) -> Result<(E::Model, Option<R::Model>), RepositoryError>
    where
        R: EntityTrait,
        R::Model: Send + Sync,
        E: Related<R>,
        C: IntoCondition,
    {
        E::find()
            .filter(condition)
            .find_also_related(related)
            .one(self.db)
            .await?
            .ok_or_else(Self::not_found)
    }

    /// Fetches every row matching `condition`.
    pub async fn find<C>(&self, condition: C) -> Result<Vec<E::Model>, RepositoryError>
    where
        C: IntoCondition,
    {
        Ok(E::find().filter(condition).all(self.db).await?)
    }

    /// Fetches every row matching `condition`, each paired with its related row.
    pub async fn find_with_related<R, C>(
        &self,
        related: R,
        condition: C,
    ) -> Result<Vec<(E::Model, Option<R::Model>)>, RepositoryError>
    where
        R: EntityTrait,
        R::Model: Send + Sync,
        E: Related<R>,
        C: IntoCondition,
    {
        Ok(E::find()
            .filter(condition)
            .find_also_related(related)
            .all(self.db)
            .await?)
    }

    /// Counts rows matching `condition`.
    pub async fn count<C>(&self, condition: C) -> Result<u64, RepositoryError>
    where
        C: IntoCondition,
    {
        Ok(E::find().filter(condition).count(self.db).await?)
    }

    /// Inserts a new row and returns it as stored.
    pub async fn create(&self, model: E::ActiveModel) -> Result<E::Model, RepositoryError> {
        Ok(model.insert(self.db).await?)
    }

    /// Overwrites every column of the row identified by the model's primary key.
    ///
    /// # Returns
    /// - `Ok(model)` - Row updated
    /// - `Err(RepositoryError::NotFound)` - No row has the model's primary key
    pub async fn update(&self, model: E::Model) -> Result<E::Model, RepositoryError> {
        model
            .into_active_model()
            .reset_all()
            .update(self.db)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => Self::not_found(),
                err => RepositoryError::DbErr(err),
            })
    }

    /// Deletes the row identified by the model's primary key.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted
    /// - `Err(RepositoryError::NotFound)` - No row was deleted
    pub async fn delete(&self, model: E::Model) -> Result<(), RepositoryError> {
        let result = model.into_active_model().delete(self.db).await?;

        if result.rows_affected == 0 {
            return Err(Self::not_found());
        }

        Ok(())
    }

    fn not_found() -> RepositoryError {
        RepositoryError::NotFound(E::default().table_name().to_string())
    }
}
