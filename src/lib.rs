//! # Pizza Restaurants
//!
//! A small REST service for restaurants, pizzas and the prices restaurants
//! charge for them, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Use cases: lookups, validation, cascading delete
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repositories
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, extractors and middleware
//! - **Web Layer** ([`web`]) - HTML landing page
//!
//! ## Endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/restaurants` | 200, restaurants without prices |
//! | GET | `/restaurants/{id}` | 200, restaurant with `restaurant_pizzas` |
//! | DELETE | `/restaurants/{id}` | 204, empty body |
//! | GET | `/pizzas` | 200, pizzas |
//! | POST | `/restaurant_pizzas` | 201, created entry with pizza and restaurant |
//! | GET | `/` | 200, HTML |
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://app.db"   # optional, this is the default
//!
//! cargo run --bin admin -- seed
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        PizzaService, RestaurantPizzaService, RestaurantService,
    };
    pub use crate::domain::entities::{
        NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantDetail,
        RestaurantPizza,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
