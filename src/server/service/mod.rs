//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller and data layers. Car and engine services
//! validate request payloads before delegating to their repositories and turn empty
//! results into explicit not-found errors. The auth services check credentials and
//! issue or verify bearer tokens.

pub mod auth;
pub mod car;
pub mod credential;
pub mod engine;
pub mod token;
