//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-checked queries.
//!
//! # Repositories
//!
//! - [`SqliteRestaurantRepository`] - Restaurants and cascading delete
//! - [`SqlitePizzaRepository`] - Pizzas
//! - [`SqliteRestaurantPizzaRepository`] - Price entries

pub mod sqlite_pizza_repository;
pub mod sqlite_restaurant_pizza_repository;
pub mod sqlite_restaurant_repository;

pub use sqlite_pizza_repository::SqlitePizzaRepository;
pub use sqlite_restaurant_pizza_repository::SqliteRestaurantPizzaRepository;
pub use sqlite_restaurant_repository::SqliteRestaurantRepository;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Schema migrations embedded from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool for `database_url`.
///
/// The database file is created if it does not exist and foreign key
/// enforcement is switched on for every connection.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}
