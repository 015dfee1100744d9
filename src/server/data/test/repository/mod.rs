use crate::server::{data::repository::Repository, error::repository::RepositoryError};
use sea_orm::{ColumnTrait, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod count;
mod delete;
mod get;
mod update;
