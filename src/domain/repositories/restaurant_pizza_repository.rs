//! Repository trait for restaurant price entries.

use crate::domain::entities::{NewRestaurantPizza, RestaurantPizza};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for [`RestaurantPizza`] rows.
///
/// Rows are created here and removed only when their restaurant is deleted
/// (see [`crate::domain::repositories::RestaurantRepository::delete_cascading`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantPizzaRepository: Send + Sync {
    /// Inserts a price entry and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors, including a foreign
    /// key violation if the pizza or restaurant vanished in the meantime.
    async fn create(&self, new_entry: NewRestaurantPizza) -> Result<RestaurantPizza, AppError>;

    /// Returns all price entries of one restaurant.
    async fn list_by_restaurant(&self, restaurant_id: i64)
    -> Result<Vec<RestaurantPizza>, AppError>;
}
