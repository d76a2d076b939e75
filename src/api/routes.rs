//! API route configuration.

use crate::api::handlers::{
    create_restaurant_pizza_handler, delete_restaurant_handler, get_restaurant_handler,
    pizza_list_handler, restaurant_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `GET    /restaurants`       - List restaurants
/// - `GET    /restaurants/{id}`  - Restaurant with its price entries
/// - `DELETE /restaurants/{id}`  - Delete a restaurant and its price entries
/// - `GET    /pizzas`            - List pizzas
/// - `POST   /restaurant_pizzas` - Create a price entry
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(restaurant_list_handler))
        .route(
            "/restaurants/{id}",
            get(get_restaurant_handler).delete(delete_restaurant_handler),
        )
        .route("/pizzas", get(pizza_list_handler))
        .route("/restaurant_pizzas", post(create_restaurant_pizza_handler))
}
