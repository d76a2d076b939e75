#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use pizza_restaurants::routes::{app_router, router};
use pizza_restaurants::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub async fn create_test_restaurant(pool: &SqlitePool, name: &str, address: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO restaurants (name, address) VALUES (?1, ?2) RETURNING id")
        .bind(name)
        .bind(address)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_pizza(pool: &SqlitePool, name: &str, ingredients: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO pizzas (name, ingredients) VALUES (?1, ?2) RETURNING id")
        .bind(name)
        .bind(ingredients)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_price(
    pool: &SqlitePool,
    restaurant_id: i64,
    pizza_id: i64,
    price: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(price)
    .bind(pizza_id)
    .bind(restaurant_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_prices(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_prices_for_restaurant(pool: &SqlitePool, restaurant_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas WHERE restaurant_id = ?1")
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Karen's Pizza Shack, Emma and a price of 10 linking them.
/// Returns `(restaurant_id, pizza_id)`.
pub async fn seed_basic(pool: &SqlitePool) -> (i64, i64) {
    let restaurant_id = create_test_restaurant(pool, "Karen's Pizza Shack", "address1").await;
    let pizza_id = create_test_pizza(pool, "Emma", "Dough, Tomato Sauce, Cheese").await;
    create_test_price(pool, restaurant_id, pizza_id, 10).await;
    (restaurant_id, pizza_id)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Server for the full application, including path normalization.
pub fn create_app_server(pool: SqlitePool) -> TestServer {
    let app = Router::new().fallback_service(app_router(create_test_state(pool)));
    TestServer::new(app).unwrap()
}
