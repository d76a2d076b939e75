//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use pizzas::pizza_list_handler;
pub use restaurant_pizzas::create_restaurant_pizza_handler;
pub use restaurants::{delete_restaurant_handler, get_restaurant_handler, restaurant_list_handler};
