//! Handlers for restaurant endpoints.

use axum::{extract::State, http::StatusCode};

use crate::api::dto::restaurant::{RestaurantDetailResponse, RestaurantItem};
use crate::api::extract::IdPath;
use crate::api::response::PrettyJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all restaurants without their price entries.
///
/// # Endpoint
///
/// `GET /restaurants`
///
/// An empty store yields `[]`.
pub async fn restaurant_list_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<RestaurantItem>>, AppError> {
    let restaurants = state.restaurant_service.list_restaurants().await?;

    Ok(PrettyJson(restaurants.into_iter().map(Into::into).collect()))
}

/// Returns one restaurant with its price entries.
///
/// # Endpoint
///
/// `GET /restaurants/{id}`
///
/// # Response
///
/// ```json
/// {
///   "address": "address1",
///   "id": 1,
///   "name": "Karen's Pizza Shack",
///   "restaurant_pizzas": [{ "pizza_id": 1, "price": 10 }]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 `{"error": "Restaurant not found"}` if the id does not exist.
/// Returns 500 `{"error": "Internal server error"}` on storage failures.
pub async fn get_restaurant_handler(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<PrettyJson<RestaurantDetailResponse>, AppError> {
    let detail = state.restaurant_service.get_restaurant(id).await?;

    Ok(PrettyJson(detail.into()))
}

/// Deletes a restaurant and every price entry it owns.
///
/// # Endpoint
///
/// `DELETE /restaurants/{id}`
///
/// Returns 204 with an empty body.
///
/// # Errors
///
/// Returns 404 `{"error": "Restaurant not found"}` if the id does not exist.
pub async fn delete_restaurant_handler(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.restaurant_service.delete_restaurant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
