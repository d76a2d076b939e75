//! Pizza service.

use crate::domain::entities::{NewPizza, Pizza};
use crate::domain::repositories::PizzaRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for pizzas.
pub struct PizzaService<P: PizzaRepository> {
    repository: Arc<P>,
}

impl<P: PizzaRepository> PizzaService<P> {
    /// Creates a new pizza service.
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Creates a pizza.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_pizza(&self, name: String, ingredients: String) -> Result<Pizza, AppError> {
        self.repository.create(NewPizza { name, ingredients }).await
    }

    /// Lists all pizzas.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, AppError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPizzaRepository;

    #[tokio::test]
    async fn test_list_pizzas() {
        let mut mock_repo = MockPizzaRepository::new();

        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                Pizza::new(
                    1,
                    "Emma".to_string(),
                    "Dough, Tomato Sauce, Cheese".to_string(),
                ),
                Pizza::new(
                    2,
                    "Geri".to_string(),
                    "Dough, Tomato Sauce, Cheese, Pepperoni".to_string(),
                ),
            ])
        });

        let pizzas = PizzaService::new(Arc::new(mock_repo))
            .list_pizzas()
            .await
            .unwrap();

        assert_eq!(pizzas.len(), 2);
        assert_eq!(pizzas[0].name, "Emma");
    }

    #[tokio::test]
    async fn test_list_pizzas_empty() {
        let mut mock_repo = MockPizzaRepository::new();
        mock_repo.expect_list().returning(|| Ok(Vec::new()));

        let pizzas = PizzaService::new(Arc::new(mock_repo))
            .list_pizzas()
            .await
            .unwrap();

        assert!(pizzas.is_empty());
    }

    #[tokio::test]
    async fn test_create_pizza() {
        let mut mock_repo = MockPizzaRepository::new();

        mock_repo
            .expect_create()
            .withf(|new| new.name == "Melanie" && new.ingredients == "Dough, Sauce, Ricotta")
            .times(1)
            .returning(|new| Ok(Pizza::new(3, new.name, new.ingredients)));

        let pizza = PizzaService::new(Arc::new(mock_repo))
            .create_pizza("Melanie".to_string(), "Dough, Sauce, Ricotta".to_string())
            .await
            .unwrap();

        assert_eq!(pizza.id, 3);
    }
}
