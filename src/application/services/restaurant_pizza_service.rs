//! Price entry service.

use crate::domain::entities::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use crate::domain::repositories::{
    PizzaRepository, RestaurantPizzaRepository, RestaurantRepository,
};
use crate::error::AppError;
use std::sync::Arc;

/// Message returned when either side of a new price entry is missing.
pub const PIZZA_OR_RESTAURANT_NOT_FOUND: &str = "Pizza or Restaurant not found";

/// Service for creating [`RestaurantPizza`] entries.
///
/// Creation is split in two steps so the caller can run its own input checks
/// between them:
///
/// 1. [`Self::find_pair`] resolves the pizza and the restaurant
/// 2. [`Self::create`] validates the price and persists the entry
pub struct RestaurantPizzaService<E, P, R>
where
    E: RestaurantPizzaRepository,
    P: PizzaRepository,
    R: RestaurantRepository,
{
    entries: Arc<E>,
    pizzas: Arc<P>,
    restaurants: Arc<R>,
}

impl<E, P, R> RestaurantPizzaService<E, P, R>
where
    E: RestaurantPizzaRepository,
    P: PizzaRepository,
    R: RestaurantRepository,
{
    /// Creates a new price entry service.
    pub fn new(entries: Arc<E>, pizzas: Arc<P>, restaurants: Arc<R>) -> Self {
        Self {
            entries,
            pizzas,
            restaurants,
        }
    }

    /// Looks up both parties of a price entry.
    ///
    /// A `None` id counts as a missing row. Both lookups always run.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pizza or the restaurant does not exist.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn find_pair(
        &self,
        pizza_id: Option<i64>,
        restaurant_id: Option<i64>,
    ) -> Result<(Pizza, Restaurant), AppError> {
        let pizza = match pizza_id {
            Some(id) => self.pizzas.find_by_id(id).await?,
            None => None,
        };

        let restaurant = match restaurant_id {
            Some(id) => self.restaurants.find_by_id(id).await?,
            None => None,
        };

        match (pizza, restaurant) {
            (Some(pizza), Some(restaurant)) => Ok((pizza, restaurant)),
            _ => Err(AppError::not_found(PIZZA_OR_RESTAURANT_NOT_FOUND)),
        }
    }

    /// Validates `price` and stores a new entry linking `pizza` and `restaurant`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the price is outside `1..=30`;
    /// nothing is written in that case.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create(
        &self,
        pizza: &Pizza,
        restaurant: &Restaurant,
        price: i64,
    ) -> Result<RestaurantPizza, AppError> {
        let new_entry = NewRestaurantPizza::new(pizza.id, restaurant.id, price)?;
        let created = self.entries.create(new_entry).await?;

        tracing::info!(
            restaurant_pizza_id = created.id,
            pizza_id = created.pizza_id,
            restaurant_id = created.restaurant_id,
            price = created.price,
            "Restaurant pizza created"
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        MockPizzaRepository, MockRestaurantPizzaRepository, MockRestaurantRepository,
    };

    type TestService = RestaurantPizzaService<
        MockRestaurantPizzaRepository,
        MockPizzaRepository,
        MockRestaurantRepository,
    >;

    fn test_pizza() -> Pizza {
        Pizza::new(
            1,
            "Emma".to_string(),
            "Dough, Tomato Sauce, Cheese".to_string(),
        )
    }

    fn test_restaurant() -> Restaurant {
        Restaurant::new(2, "Kiki's Pizza".to_string(), "address3".to_string())
    }

    fn service(
        entries: MockRestaurantPizzaRepository,
        pizzas: MockPizzaRepository,
        restaurants: MockRestaurantRepository,
    ) -> TestService {
        RestaurantPizzaService::new(Arc::new(entries), Arc::new(pizzas), Arc::new(restaurants))
    }

    #[tokio::test]
    async fn test_find_pair_success() {
        let mut pizzas = MockPizzaRepository::new();
        let mut restaurants = MockRestaurantRepository::new();

        pizzas
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(test_pizza())));
        restaurants
            .expect_find_by_id()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(Some(test_restaurant())));

        let (pizza, restaurant) = service(MockRestaurantPizzaRepository::new(), pizzas, restaurants)
            .find_pair(Some(1), Some(2))
            .await
            .unwrap();

        assert_eq!(pizza, test_pizza());
        assert_eq!(restaurant, test_restaurant());
    }

    #[tokio::test]
    async fn test_find_pair_missing_pizza() {
        let mut pizzas = MockPizzaRepository::new();
        let mut restaurants = MockRestaurantRepository::new();

        pizzas.expect_find_by_id().returning(|_| Ok(None));
        restaurants
            .expect_find_by_id()
            .returning(|_| Ok(Some(test_restaurant())));

        let result = service(MockRestaurantPizzaRepository::new(), pizzas, restaurants)
            .find_pair(Some(99), Some(2))
            .await;

        match result {
            Err(AppError::NotFound { message }) => {
                assert_eq!(message, PIZZA_OR_RESTAURANT_NOT_FOUND)
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_pair_absent_ids_skip_lookup() {
        let mut pizzas = MockPizzaRepository::new();
        let mut restaurants = MockRestaurantRepository::new();

        pizzas.expect_find_by_id().never();
        restaurants.expect_find_by_id().never();

        let result = service(MockRestaurantPizzaRepository::new(), pizzas, restaurants)
            .find_pair(None, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut entries = MockRestaurantPizzaRepository::new();

        entries
            .expect_create()
            .withf(|new| new.price() == 15 && new.pizza_id() == 1 && new.restaurant_id() == 2)
            .times(1)
            .returning(|new| {
                Ok(RestaurantPizza::new(
                    10,
                    new.price(),
                    new.pizza_id(),
                    new.restaurant_id(),
                ))
            });

        let created = service(
            entries,
            MockPizzaRepository::new(),
            MockRestaurantRepository::new(),
        )
        .create(&test_pizza(), &test_restaurant(), 15)
        .await
        .unwrap();

        assert_eq!(created, RestaurantPizza::new(10, 15, 1, 2));
    }

    #[tokio::test]
    async fn test_create_rejects_price_before_persisting() {
        for price in [0, 31] {
            let mut entries = MockRestaurantPizzaRepository::new();
            entries.expect_create().never();

            let result = service(
                entries,
                MockPizzaRepository::new(),
                MockRestaurantRepository::new(),
            )
            .create(&test_pizza(), &test_restaurant(), price)
            .await;

            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }
}
