//! Association between a restaurant and a pizza, carrying the price.

use validator::{Validate, ValidationErrors};

/// Lowest accepted price (inclusive).
pub const MIN_PRICE: i64 = 1;
/// Highest accepted price (inclusive).
pub const MAX_PRICE: i64 = 30;

/// The price a restaurant charges for a pizza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl RestaurantPizza {
    pub fn new(id: i64, price: i64, pizza_id: i64, restaurant_id: i64) -> Self {
        Self {
            id,
            price,
            pizza_id,
            restaurant_id,
        }
    }
}

/// Validated input for inserting a [`RestaurantPizza`].
///
/// Fields are private: the only way to obtain a value is
/// [`NewRestaurantPizza::new`], which rejects prices outside
/// `MIN_PRICE..=MAX_PRICE`.
#[derive(Debug, Clone, Validate)]
pub struct NewRestaurantPizza {
    #[validate(range(min = 1, max = 30, message = "Price must be between 1 and 30"))]
    price: i64,
    pizza_id: i64,
    restaurant_id: i64,
}

impl NewRestaurantPizza {
    /// Builds a new association after validating the price.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if `price` is outside `1..=30`.
    pub fn new(pizza_id: i64, restaurant_id: i64, price: i64) -> Result<Self, ValidationErrors> {
        let candidate = Self {
            price,
            pizza_id,
            restaurant_id,
        };
        candidate.validate()?;
        Ok(candidate)
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn pizza_id(&self) -> i64 {
        self.pizza_id
    }

    pub fn restaurant_id(&self) -> i64 {
        self.restaurant_id
    }
}

/// Returns whether `price` lies in the accepted range.
pub fn is_valid_price(price: i64) -> bool {
    (MIN_PRICE..=MAX_PRICE).contains(&price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        for price in [MIN_PRICE, 15, MAX_PRICE] {
            let new = NewRestaurantPizza::new(1, 2, price).unwrap();
            assert_eq!(new.price(), price);
            assert_eq!(new.pizza_id(), 1);
            assert_eq!(new.restaurant_id(), 2);
        }
    }

    #[test]
    fn test_out_of_range_prices_rejected() {
        for price in [i64::MIN, -5, 0, 31, 100] {
            let err = NewRestaurantPizza::new(1, 1, price).unwrap_err();
            assert!(err.field_errors().contains_key("price"));
        }
    }

    #[test]
    fn test_is_valid_price_matches_constructor() {
        for price in -2..=33 {
            assert_eq!(
                is_valid_price(price),
                NewRestaurantPizza::new(1, 1, price).is_ok(),
                "disagreement at price {price}"
            );
        }
    }
}
