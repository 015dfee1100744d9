//! SeaORM entity definitions for the carzone schema.

pub mod prelude;

pub mod car;
pub mod engine;
