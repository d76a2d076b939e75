//! Application layer services implementing the request use cases.
//!
//! Services consume repository traits and turn "absent" lookups and invalid
//! input into typed [`crate::error::AppError`] values for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::restaurant_service::RestaurantService`] - Listing, detail and cascading delete
//! - [`services::pizza_service::PizzaService`] - Pizza listing
//! - [`services::restaurant_pizza_service::RestaurantPizzaService`] - Price entry creation

pub mod services;
