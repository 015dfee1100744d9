use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_engine_table::Engine;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_uuid(Car::Id))
                    .col(string(Car::Name))
                    .col(string(Car::Year))
                    .col(string(Car::Brand))
                    .col(string(Car::FuelType))
                    .col(uuid(Car::EngineId))
                    .col(double(Car::Price))
                    .col(
                        timestamp_with_time_zone(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Car::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_engine_id")
                            .from(Car::Table, Car::EngineId)
                            .to(Engine::Table, Engine::EngineId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_brand")
                    .table(Car::Table)
                    .col(Car::Brand)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Name,
    Year,
    Brand,
    FuelType,
    EngineId,
    Price,
    CreatedAt,
    UpdatedAt,
}
