//! Handlers for pizza endpoints.

use axum::extract::State;

use crate::api::dto::pizza::PizzaItem;
use crate::api::response::PrettyJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all pizzas.
///
/// # Endpoint
///
/// `GET /pizzas`
pub async fn pizza_list_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<PizzaItem>>, AppError> {
    let pizzas = state.pizza_service.list_pizzas().await?;

    Ok(PrettyJson(pizzas.into_iter().map(Into::into).collect()))
}
