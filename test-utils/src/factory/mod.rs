//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Factories insert directly through SeaORM and
//! bypass the application's validation, so tests can also seed rows the API would reject.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let engine = factory::create_engine(&db).await?;
//! let car = factory::create_car(&db, engine.engine_id).await?;
//!
//! let (engine, car) = factory::helpers::create_car_with_engine(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let car = factory::car::CarFactory::new(&db, engine.engine_id)
//!     .brand("Toyota")
//!     .fuel_type("Hybrid")
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod engine;
pub mod helpers;

pub use car::create_car;
pub use engine::create_engine;
