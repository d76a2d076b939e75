//! Repository trait for pizzas.

use crate::domain::entities::{NewPizza, Pizza};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pizzas.
///
/// Pizzas are never deleted through this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// Inserts a pizza and returns it with its assigned id.
    async fn create(&self, new_pizza: NewPizza) -> Result<Pizza, AppError>;

    /// Finds a pizza by id. A missing row is `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, AppError>;

    /// Returns every pizza. Callers must not depend on the order.
    async fn list(&self) -> Result<Vec<Pizza>, AppError>;
}
