//! DTOs for the price entry endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::dto::pizza::PizzaItem;
use crate::api::dto::restaurant::RestaurantItem;
use crate::domain::entities::{
    MAX_PRICE, MIN_PRICE, Pizza, Restaurant, RestaurantPizza, is_valid_price,
};
use crate::error::AppError;

/// Request body for `POST /restaurant_pizzas`.
///
/// Every field is optional at the parsing stage. A missing, `null` or
/// non-integer value is read as `None`, so the handler can apply its checks in
/// order: unknown ids give 404, a bad price gives 400.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    #[serde(default, deserialize_with = "integer_or_none")]
    pub pizza_id: Option<i64>,

    #[serde(default, deserialize_with = "integer_or_none")]
    pub restaurant_id: Option<i64>,

    #[serde(default, deserialize_with = "integer_or_none")]
    pub price: Option<i64>,
}

impl CreateRestaurantPizzaRequest {
    /// Returns the price if it is present and within `1..=30`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] otherwise.
    pub fn checked_price(&self) -> Result<i64, AppError> {
        match self.price {
            Some(price) if is_valid_price(price) => Ok(price),
            Some(price) => Err(AppError::validation(format!(
                "price {price} is outside {MIN_PRICE}..={MAX_PRICE}"
            ))),
            None => Err(AppError::validation("price is missing or not an integer")),
        }
    }
}

fn integer_or_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64()))
}

/// Response for a created price entry, with both parties fully expanded.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaResponse {
    pub id: i64,
    pub pizza: PizzaItem,
    pub pizza_id: i64,
    pub price: i64,
    pub restaurant: RestaurantItem,
    pub restaurant_id: i64,
}

impl RestaurantPizzaResponse {
    pub fn new(entry: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        Self {
            id: entry.id,
            pizza: pizza.into(),
            pizza_id: entry.pizza_id,
            price: entry.price,
            restaurant: restaurant.into(),
            restaurant_id: entry.restaurant_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> CreateRestaurantPizzaRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_parse_complete_request() {
        let request = parse(json!({ "pizza_id": 1, "restaurant_id": 3, "price": 5 }));

        assert_eq!(request.pizza_id, Some(1));
        assert_eq!(request.restaurant_id, Some(3));
        assert_eq!(request.checked_price().unwrap(), 5);
    }

    #[test]
    fn test_missing_and_non_integer_fields_are_none() {
        let request = parse(json!({ "pizza_id": "1", "price": null }));
        assert_eq!(request.pizza_id, None);
        assert_eq!(request.restaurant_id, None);
        assert_eq!(request.price, None);

        let request = parse(json!({ "pizza_id": 1, "restaurant_id": 1, "price": 12.5 }));
        assert_eq!(request.price, None);
    }

    #[test]
    fn test_checked_price_bounds() {
        for price in [1, 30] {
            let request = CreateRestaurantPizzaRequest {
                price: Some(price),
                ..Default::default()
            };
            assert_eq!(request.checked_price().unwrap(), price);
        }

        for price in [Some(0), Some(31), None] {
            let request = CreateRestaurantPizzaRequest {
                price,
                ..Default::default()
            };
            assert!(matches!(
                request.checked_price().unwrap_err(),
                AppError::Validation { .. }
            ));
        }
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_value::<CreateRestaurantPizzaRequest>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_response_is_denormalized() {
        let response = RestaurantPizzaResponse::new(
            RestaurantPizza::new(4, 5, 1, 3),
            Pizza::new(
                1,
                "Emma".to_string(),
                "Dough, Tomato Sauce, Cheese".to_string(),
            ),
            Restaurant::new(3, "Kiki's Pizza".to_string(), "address3".to_string()),
        );

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "id": 4,
                "price": 5,
                "pizza_id": 1,
                "restaurant_id": 3,
                "pizza": {
                    "id": 1,
                    "name": "Emma",
                    "ingredients": "Dough, Tomato Sauce, Cheese"
                },
                "restaurant": {
                    "id": 3,
                    "name": "Kiki's Pizza",
                    "address": "address3"
                }
            })
        );
    }
}
