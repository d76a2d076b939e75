//! Restaurant service.

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantDetail};
use crate::domain::repositories::{RestaurantPizzaRepository, RestaurantRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Message for lookups of a restaurant id that does not exist.
pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

/// Service for reading and deleting restaurants.
///
/// The price list of a restaurant is loaded explicitly through the
/// [`RestaurantPizzaRepository`] when the detail view is requested.
pub struct RestaurantService<R: RestaurantRepository, P: RestaurantPizzaRepository> {
    restaurants: Arc<R>,
    restaurant_pizzas: Arc<P>,
}

impl<R: RestaurantRepository, P: RestaurantPizzaRepository> RestaurantService<R, P> {
    /// Creates a new restaurant service.
    pub fn new(restaurants: Arc<R>, restaurant_pizzas: Arc<P>) -> Self {
        Self {
            restaurants,
            restaurant_pizzas,
        }
    }

    /// Creates a restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_restaurant(
        &self,
        name: String,
        address: String,
    ) -> Result<Restaurant, AppError> {
        self.restaurants
            .create(NewRestaurant { name, address })
            .await
    }

    /// Lists all restaurants without their price entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        self.restaurants.list().await
    }

    /// Loads a restaurant and its price entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn get_restaurant(&self, id: i64) -> Result<RestaurantDetail, AppError> {
        let restaurant = self
            .restaurants
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESTAURANT_NOT_FOUND))?;

        let restaurant_pizzas = self.restaurant_pizzas.list_by_restaurant(id).await?;

        Ok(RestaurantDetail {
            restaurant,
            restaurant_pizzas,
        })
    }

    /// Deletes a restaurant and all of its price entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the restaurant does not exist.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn delete_restaurant(&self, id: i64) -> Result<(), AppError> {
        if self.restaurants.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(RESTAURANT_NOT_FOUND));
        }

        // Another request may have removed it between the lookup and the delete.
        if !self.restaurants.delete_cascading(id).await? {
            return Err(AppError::not_found(RESTAURANT_NOT_FOUND));
        }

        tracing::info!(restaurant_id = id, "Restaurant deleted");
        Ok(())
    }
}
