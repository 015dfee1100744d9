//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry request data
//! that has already passed validation into the data layer.

pub mod car;
pub mod engine;
