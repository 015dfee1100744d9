pub use super::car::Entity as Car;
pub use super::engine::Entity as Engine;
