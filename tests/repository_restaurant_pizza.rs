mod common;

use pizza_restaurants::domain::entities::NewRestaurantPizza;
use pizza_restaurants::domain::repositories::RestaurantPizzaRepository;
use pizza_restaurants::infrastructure::persistence::SqliteRestaurantPizzaRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_entry(pool: SqlitePool) {
    let restaurant_id = common::create_test_restaurant(&pool, "Kiki's Pizza", "address3").await;
    let pizza_id = common::create_test_pizza(&pool, "Emma", "Dough").await;

    let repo = SqliteRestaurantPizzaRepository::new(Arc::new(pool.clone()));

    let new_entry = NewRestaurantPizza::new(pizza_id, restaurant_id, 30).unwrap();
    let entry = repo.create(new_entry).await.unwrap();

    assert!(entry.id > 0);
    assert_eq!(entry.price, 30);
    assert_eq!(entry.pizza_id, pizza_id);
    assert_eq!(entry.restaurant_id, restaurant_id);
    assert_eq!(common::count_prices(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_entry_with_unknown_pizza_fails(pool: SqlitePool) {
    let restaurant_id = common::create_test_restaurant(&pool, "Kiki's Pizza", "address3").await;

    let repo = SqliteRestaurantPizzaRepository::new(Arc::new(pool.clone()));

    let new_entry = NewRestaurantPizza::new(9999, restaurant_id, 5).unwrap();
    let result = repo.create(new_entry).await;

    assert!(result.is_err());
    assert_eq!(common::count_prices(&pool).await, 0);
}

#[sqlx::test]
async fn test_list_by_restaurant(pool: SqlitePool) {
    let (restaurant_id, pizza_id) = common::seed_basic(&pool).await;
    let other_id = common::create_test_restaurant(&pool, "Other", "elsewhere").await;
    let geri = common::create_test_pizza(&pool, "Geri", "Dough, Pepperoni").await;
    common::create_test_price(&pool, restaurant_id, geri, 12).await;
    common::create_test_price(&pool, other_id, pizza_id, 3).await;

    let repo = SqliteRestaurantPizzaRepository::new(Arc::new(pool));

    let entries = repo.list_by_restaurant(restaurant_id).await.unwrap();

    let summary: Vec<(i64, i64)> = entries.iter().map(|e| (e.pizza_id, e.price)).collect();
    assert_eq!(summary, vec![(pizza_id, 10), (geri, 12)]);
    assert!(entries.iter().all(|e| e.restaurant_id == restaurant_id));

    assert!(repo.list_by_restaurant(9999).await.unwrap().is_empty());
}
