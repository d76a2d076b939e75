//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Restaurant`] - A restaurant with a name and an address
//! - [`Pizza`] - A pizza with a free-text ingredient list
//! - [`RestaurantPizza`] - The price a restaurant charges for a pizza
//! - [`RestaurantDetail`] - A restaurant together with its price list
//!
//! Each persisted entity has a `New*` counterpart carrying the fields needed
//! to insert it. [`NewRestaurantPizza`] can only be built through its
//! validating constructor.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::{NewPizza, Pizza};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantDetail};
pub use restaurant_pizza::{MAX_PRICE, MIN_PRICE, NewRestaurantPizza, RestaurantPizza, is_valid_price};
