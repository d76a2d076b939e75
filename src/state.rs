//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{PizzaService, RestaurantPizzaService, RestaurantService};
use crate::infrastructure::persistence::{
    SqlitePizzaRepository, SqliteRestaurantPizzaRepository, SqliteRestaurantRepository,
};

pub type AppRestaurantService =
    RestaurantService<SqliteRestaurantRepository, SqliteRestaurantPizzaRepository>;
pub type AppPizzaService = PizzaService<SqlitePizzaRepository>;
pub type AppRestaurantPizzaService = RestaurantPizzaService<
    SqliteRestaurantPizzaRepository,
    SqlitePizzaRepository,
    SqliteRestaurantRepository,
>;

/// Services backed by one SQLite pool. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: Arc<AppRestaurantService>,
    pub pizza_service: Arc<AppPizzaService>,
    pub restaurant_pizza_service: Arc<AppRestaurantPizzaService>,
}

impl AppState {
    /// Wires repositories and services on top of `pool`.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let restaurant_repo = Arc::new(SqliteRestaurantRepository::new(pool.clone()));
        let pizza_repo = Arc::new(SqlitePizzaRepository::new(pool.clone()));
        let restaurant_pizza_repo = Arc::new(SqliteRestaurantPizzaRepository::new(pool));

        Self {
            restaurant_service: Arc::new(RestaurantService::new(
                restaurant_repo.clone(),
                restaurant_pizza_repo.clone(),
            )),
            pizza_service: Arc::new(PizzaService::new(pizza_repo.clone())),
            restaurant_pizza_service: Arc::new(RestaurantPizzaService::new(
                restaurant_pizza_repo,
                pizza_repo,
                restaurant_repo,
            )),
        }
    }
}
