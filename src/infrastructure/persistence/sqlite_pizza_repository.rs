//! SQLite implementation of the pizza repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewPizza, Pizza};
use crate::domain::repositories::PizzaRepository;
use crate::error::AppError;

type PizzaRow = (i64, String, String);

fn into_pizza((id, name, ingredients): PizzaRow) -> Pizza {
    Pizza::new(id, name, ingredients)
}

/// SQLite repository for pizzas.
pub struct SqlitePizzaRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePizzaRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PizzaRepository for SqlitePizzaRepository {
    async fn create(&self, new_pizza: NewPizza) -> Result<Pizza, AppError> {
        let row: PizzaRow = sqlx::query_as(
            r#"
            INSERT INTO pizzas (name, ingredients)
            VALUES (?1, ?2)
            RETURNING id, name, ingredients
            "#,
        )
        .bind(new_pizza.name)
        .bind(new_pizza.ingredients)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(into_pizza(row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, AppError> {
        let row: Option<PizzaRow> =
            sqlx::query_as("SELECT id, name, ingredients FROM pizzas WHERE id = ?1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(into_pizza))
    }

    async fn list(&self) -> Result<Vec<Pizza>, AppError> {
        let rows: Vec<PizzaRow> =
            sqlx::query_as("SELECT id, name, ingredients FROM pizzas ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(into_pizza).collect())
    }
}
