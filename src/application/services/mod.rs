//! Business logic services for the application layer.

pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod restaurant_service;

pub use pizza_service::PizzaService;
pub use restaurant_pizza_service::RestaurantPizzaService;
pub use restaurant_service::RestaurantService;
