//! Repository trait definitions for the domain layer.
//!
//! These traits are the only way the rest of the crate reaches the store.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated with `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`RestaurantRepository`] - Restaurant CRUD with cascading delete
//! - [`PizzaRepository`] - Pizza reads and inserts
//! - [`RestaurantPizzaRepository`] - Price entries
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod pizza_repository;
pub mod restaurant_pizza_repository;
pub mod restaurant_repository;

pub use pizza_repository::PizzaRepository;
pub use restaurant_pizza_repository::RestaurantPizzaRepository;
pub use restaurant_repository::RestaurantRepository;

#[cfg(test)]
pub use pizza_repository::MockPizzaRepository;
#[cfg(test)]
pub use restaurant_pizza_repository::MockRestaurantPizzaRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
