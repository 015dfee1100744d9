//! Request and response DTOs of the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models convert into them
//! at the controller boundary.

pub mod api;
pub mod auth;
pub mod car;
pub mod engine;
