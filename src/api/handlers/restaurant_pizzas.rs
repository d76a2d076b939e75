//! Handler for creating price entries.

use axum::{extract::State, http::StatusCode};

use crate::api::dto::restaurant_pizza::{CreateRestaurantPizzaRequest, RestaurantPizzaResponse};
use crate::api::extract::JsonBody;
use crate::api::response::PrettyJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates the price a restaurant charges for a pizza.
///
/// # Endpoint
///
/// `POST /restaurant_pizzas`
///
/// # Request Body
///
/// ```json
/// { "pizza_id": 1, "restaurant_id": 3, "price": 5 }
/// ```
///
/// # Checks, in order
///
/// 1. Pizza and restaurant must exist, else 404
///    `{"error": "Pizza or Restaurant not found"}`
/// 2. Price must be an integer in `1..=30`, else 400
///    `{"errors": ["validation errors"]}`
///
/// The price is checked again when the entry is constructed, before anything
/// is written.
///
/// # Response
///
/// 201 with the entry plus the full pizza and restaurant objects.
///
/// # Errors
///
/// Returns 400 `{"error": "Bad request"}` if the body is not a JSON object.
pub async fn create_restaurant_pizza_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, PrettyJson<RestaurantPizzaResponse>), AppError> {
    let service = &state.restaurant_pizza_service;

    let (pizza, restaurant) = service
        .find_pair(payload.pizza_id, payload.restaurant_id)
        .await?;

    let price = payload.checked_price()?;

    let entry = service.create(&pizza, &restaurant, price).await?;

    Ok((
        StatusCode::CREATED,
        PrettyJson(RestaurantPizzaResponse::new(entry, pizza, restaurant)),
    ))
}
