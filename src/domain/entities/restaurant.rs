//! Restaurant entity.

use super::restaurant_pizza::RestaurantPizza;

/// A restaurant.
///
/// Owns its [`RestaurantPizza`] rows: deleting a restaurant deletes its
/// price list with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl Restaurant {
    pub fn new(id: i64, name: String, address: String) -> Self {
        Self { id, name, address }
    }
}

/// Input data for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

/// A restaurant loaded together with all of its price entries.
#[derive(Debug, Clone)]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizza>,
}
