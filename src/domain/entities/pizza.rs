//! Pizza entity.

/// A pizza that restaurants can put on their menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    /// Free-text description, e.g. `"Dough, Tomato Sauce, Cheese"`.
    pub ingredients: String,
}

impl Pizza {
    pub fn new(id: i64, name: String, ingredients: String) -> Self {
        Self {
            id,
            name,
            ingredients,
        }
    }
}

/// Input data for creating a new pizza.
#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}
