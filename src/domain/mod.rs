//! Domain layer containing the data model and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Immutable value structs for restaurants, pizzas and prices
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the storage engine or on HTTP.
//! Relationships are never loaded implicitly: a restaurant's price list is
//! fetched through [`repositories::RestaurantPizzaRepository`] when a caller
//! asks for it.

pub mod entities;
pub mod repositories;
