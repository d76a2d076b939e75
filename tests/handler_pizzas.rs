mod common;

use serde_json::{Value, json};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_pizzas_empty_store(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/pizzas").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[sqlx::test]
async fn test_pizzas_list(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let emma = common::create_test_pizza(&pool, "Emma", "Dough, Tomato Sauce, Cheese").await;
    let geri =
        common::create_test_pizza(&pool, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await;

    let response = server.get("/pizzas").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    assert!(items.contains(&json!({
        "id": emma,
        "name": "Emma",
        "ingredients": "Dough, Tomato Sauce, Cheese"
    })));
    assert!(items.contains(&json!({
        "id": geri,
        "name": "Geri",
        "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"
    })));
}

#[sqlx::test]
async fn test_pizzas_list_has_no_side_effects(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    common::seed_basic(&pool).await;

    let first = server.get("/pizzas").await.json::<Value>();
    let second = server.get("/pizzas").await.json::<Value>();

    assert_eq!(first, second);
    assert_eq!(common::count_prices(&pool).await, 1);
}
