//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, repository delegation, login and tokens
//! - **Data Layer** (`data/`) - Generic repository plus car and engine repositories
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, token service, credentials)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, shutdown signal
//! - **Router** (`router`) - Route table, request tracing layers and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** assigns a trace ID and routes the request
//! 2. **Middleware** verifies the bearer token on protected routes
//! 3. **Controller** parses path, query and body, calls service
//! 4. **Service** validates the payload and calls the repository
//! 5. **Data** checks associations, queries the database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
