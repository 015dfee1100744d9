use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::engine::Entity",
        from = "Column::EngineId",
        to = "super::engine::Column::EngineId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Engine,
}

impl Related<super::engine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Engine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
