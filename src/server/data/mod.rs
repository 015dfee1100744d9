//! Database repository layer.
//!
//! `Repository` provides the entity-agnostic CRUD operations. The car and engine
//! repositories compose it, enforce the association rules between the two tables and
//! convert entity models into domain models before returning them.

pub mod car;
pub mod engine;
pub mod repository;

#[cfg(test)]
mod test;
