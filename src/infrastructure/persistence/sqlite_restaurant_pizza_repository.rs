//! SQLite implementation of the restaurant price repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewRestaurantPizza, RestaurantPizza};
use crate::domain::repositories::RestaurantPizzaRepository;
use crate::error::AppError;

type RestaurantPizzaRow = (i64, i64, i64, i64);

fn into_restaurant_pizza(
    (id, price, pizza_id, restaurant_id): RestaurantPizzaRow,
) -> RestaurantPizza {
    RestaurantPizza::new(id, price, pizza_id, restaurant_id)
}

/// SQLite repository for price entries.
///
/// The table enforces both foreign keys and `CHECK (price BETWEEN 1 AND 30)`
/// in addition to the validation done by [`NewRestaurantPizza::new`].
pub struct SqliteRestaurantPizzaRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteRestaurantPizzaRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantPizzaRepository for SqliteRestaurantPizzaRepository {
    async fn create(&self, new_entry: NewRestaurantPizza) -> Result<RestaurantPizza, AppError> {
        let row: RestaurantPizzaRow = sqlx::query_as(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, price, pizza_id, restaurant_id
            "#,
        )
        .bind(new_entry.price())
        .bind(new_entry.pizza_id())
        .bind(new_entry.restaurant_id())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(into_restaurant_pizza(row))
    }

    async fn list_by_restaurant(
        &self,
        restaurant_id: i64,
    ) -> Result<Vec<RestaurantPizza>, AppError> {
        let rows: Vec<RestaurantPizzaRow> = sqlx::query_as(
            r#"
            SELECT id, price, pizza_id, restaurant_id
            FROM restaurant_pizzas
            WHERE restaurant_id = ?1
            ORDER BY id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(into_restaurant_pizza).collect())
    }
}
