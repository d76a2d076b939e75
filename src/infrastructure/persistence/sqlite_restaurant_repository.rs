//! SQLite implementation of the restaurant repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewRestaurant, Restaurant};
use crate::domain::repositories::RestaurantRepository;
use crate::error::AppError;

type RestaurantRow = (i64, String, String);

fn into_restaurant((id, name, address): RestaurantRow) -> Restaurant {
    Restaurant::new(id, name, address)
}

/// SQLite repository for restaurants.
pub struct SqliteRestaurantRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteRestaurantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for SqliteRestaurantRepository {
    async fn create(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError> {
        let row: RestaurantRow = sqlx::query_as(
            r#"
            INSERT INTO restaurants (name, address)
            VALUES (?1, ?2)
            RETURNING id, name, address
            "#,
        )
        .bind(new_restaurant.name)
        .bind(new_restaurant.address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(into_restaurant(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row: Option<RestaurantRow> = sqlx::query_as(
            r#"
            SELECT id, name, address
            FROM restaurants
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(into_restaurant))
    }

    async fn list(&self) -> Result<Vec<Restaurant>, AppError> {
        let rows: Vec<RestaurantRow> = sqlx::query_as(
            r#"
            SELECT id, name, address
            FROM restaurants
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(into_restaurant).collect())
    }

    async fn delete_cascading(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM restaurants WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
