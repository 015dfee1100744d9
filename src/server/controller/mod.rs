//! HTTP request handlers.
//!
//! Handlers parse path, query and body input, call the matching service and convert
//! domain models into DTOs. Every handler carries a `utoipa::path` annotation that
//! feeds the generated OpenAPI document.

pub mod auth;
pub mod car;
pub mod engine;
pub mod health;
