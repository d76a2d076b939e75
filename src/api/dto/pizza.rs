//! DTOs for pizza endpoints.

use serde::Serialize;

use crate::domain::entities::Pizza;

/// Pizza as listed by `GET /pizzas` and nested in the created price entry.
#[derive(Debug, Serialize)]
pub struct PizzaItem {
    pub id: i64,
    pub ingredients: String,
    pub name: String,
}

impl From<Pizza> for PizzaItem {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            ingredients: pizza.ingredients,
            name: pizza.name,
        }
    }
}
