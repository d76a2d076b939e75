//! DTOs for restaurant endpoints.

use serde::Serialize;

use crate::domain::entities::{Restaurant, RestaurantDetail, RestaurantPizza};

/// Restaurant without its price entries.
///
/// Used by `GET /restaurants` and nested in the created price entry.
#[derive(Debug, Serialize)]
pub struct RestaurantItem {
    pub address: String,
    pub id: i64,
    pub name: String,
}

impl From<Restaurant> for RestaurantItem {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            address: restaurant.address,
            id: restaurant.id,
            name: restaurant.name,
        }
    }
}

/// One price entry as shown inside a restaurant: only `pizza_id` and `price`.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaSummary {
    pub pizza_id: i64,
    pub price: i64,
}

impl From<RestaurantPizza> for RestaurantPizzaSummary {
    fn from(entry: RestaurantPizza) -> Self {
        Self {
            pizza_id: entry.pizza_id,
            price: entry.price,
        }
    }
}

/// Response for `GET /restaurants/{id}`.
#[derive(Debug, Serialize)]
pub struct RestaurantDetailResponse {
    pub address: String,
    pub id: i64,
    pub name: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaSummary>,
}

impl From<RestaurantDetail> for RestaurantDetailResponse {
    fn from(detail: RestaurantDetail) -> Self {
        let RestaurantDetail {
            restaurant,
            restaurant_pizzas,
        } = detail;

        Self {
            address: restaurant.address,
            id: restaurant.id,
            name: restaurant.name,
            restaurant_pizzas: restaurant_pizzas.into_iter().map(Into::into).collect(),
        }
    }
}
