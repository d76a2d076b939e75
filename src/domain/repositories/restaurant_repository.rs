//! Repository trait for restaurants.

use crate::domain::entities::{NewRestaurant, Restaurant};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for restaurants.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteRestaurantRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Inserts a restaurant and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn create(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, AppError>;

    /// Finds a restaurant by id. A missing row is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError>;

    /// Returns every restaurant. Callers must not depend on the order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list(&self) -> Result<Vec<Restaurant>, AppError>;

    /// Deletes a restaurant together with all of its price entries in one
    /// transaction.
    ///
    /// Returns `false` if no restaurant with this id existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors; nothing is deleted
    /// in that case.
    async fn delete_cascading(&self, id: i64) -> Result<bool, AppError>;
}
