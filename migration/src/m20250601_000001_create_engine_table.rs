use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Engine::Table)
                    .if_not_exists()
                    .col(pk_uuid(Engine::EngineId))
                    .col(integer(Engine::Displacement))
                    .col(integer(Engine::NoOfCylinders))
                    .col(integer(Engine::CarRange))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Engine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Engine {
    Table,
    EngineId,
    Displacement,
    NoOfCylinders,
    CarRange,
}
