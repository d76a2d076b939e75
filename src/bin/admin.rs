//! CLI administration tool for pizza-restaurants.
//!
//! The HTTP API cannot create restaurants or pizzas, so this tool is how
//! data gets into the store.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations and check the connection
//! cargo run --bin admin -- db check
//!
//! # Load the sample data set (wipe existing rows first)
//! cargo run --bin admin -- seed --reset
//!
//! # Add single rows
//! cargo run --bin admin -- restaurant add --name "Kiki's Pizza" --address "address3"
//! cargo run --bin admin -- pizza add --name "Emma" --ingredients "Dough, Tomato Sauce, Cheese"
//!
//! # Row counts
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` / `DB_URI`: SQLite connection string (default `sqlite://app.db`)

use pizza_restaurants::application::services::{
    PizzaService, RestaurantPizzaService, RestaurantService,
};
use pizza_restaurants::config;
use pizza_restaurants::infrastructure::persistence::{
    MIGRATOR, SqlitePizzaRepository, SqliteRestaurantPizzaRepository, SqliteRestaurantRepository,
    connect_pool,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Restaurants loaded by `seed`: (name, address).
const SEED_RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

/// Pizzas loaded by `seed`: (name, ingredients).
const SEED_PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// Prices loaded by `seed`: (restaurant index, pizza index, price).
const SEED_PRICES: [(usize, usize, i64); 3] = [(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// CLI tool for managing pizza-restaurants.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Load the sample restaurants, pizzas and prices
    Seed {
        /// Delete all existing rows first
        #[arg(long)]
        reset: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Manage restaurants
    Restaurant {
        #[command(subcommand)]
        action: RestaurantAction,
    },

    /// Manage pizzas
    Pizza {
        #[command(subcommand)]
        action: PizzaAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Restaurant subcommands.
#[derive(Subcommand)]
enum RestaurantAction {
    /// Add a restaurant
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        address: String,
    },
}

/// Pizza subcommands.
#[derive(Subcommand)]
enum PizzaAction {
    /// Add a pizza
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        ingredients: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the connection and apply pending migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    match cli.command {
        Commands::Seed { reset, yes } => seed(&pool, reset, yes).await?,
        Commands::Restaurant { action } => handle_restaurant_action(action, &pool).await?,
        Commands::Pizza { action } => handle_pizza_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &config.database_url).await?,
    }

    Ok(())
}

/// Loads the sample data set.
///
/// With `reset`, all existing rows are deleted first (after confirmation
/// unless `skip_confirm`).
async fn seed(pool: &SqlitePool, reset: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🍕 Seeding database".bright_blue().bold());
    println!();

    if reset {
        if !skip_confirm {
            let confirmed = Confirm::new()
                .with_prompt("Delete all restaurants, pizzas and prices?")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }

        clear_tables(pool).await?;
        println!("{}", "  Existing rows deleted".yellow());
    }

    let pool = Arc::new(pool.clone());
    let restaurant_repo = Arc::new(SqliteRestaurantRepository::new(pool.clone()));
    let pizza_repo = Arc::new(SqlitePizzaRepository::new(pool.clone()));
    let price_repo = Arc::new(SqliteRestaurantPizzaRepository::new(pool));

    let restaurant_service = RestaurantService::new(restaurant_repo.clone(), price_repo.clone());
    let pizza_service = PizzaService::new(pizza_repo.clone());
    let price_service = RestaurantPizzaService::new(price_repo, pizza_repo, restaurant_repo);

    let mut restaurants = Vec::with_capacity(SEED_RESTAURANTS.len());
    for (name, address) in SEED_RESTAURANTS {
        let restaurant = restaurant_service
            .create_restaurant(name.to_string(), address.to_string())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create restaurant: {}", e))?;
        println!("  {} restaurant #{} {}", "+".green(), restaurant.id, name.cyan());
        restaurants.push(restaurant);
    }

    let mut pizzas = Vec::with_capacity(SEED_PIZZAS.len());
    for (name, ingredients) in SEED_PIZZAS {
        let pizza = pizza_service
            .create_pizza(name.to_string(), ingredients.to_string())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create pizza: {}", e))?;
        println!("  {} pizza #{} {}", "+".green(), pizza.id, name.cyan());
        pizzas.push(pizza);
    }

    for (restaurant_idx, pizza_idx, price) in SEED_PRICES {
        let restaurant = &restaurants[restaurant_idx];
        let pizza = &pizzas[pizza_idx];
        price_service
            .create(pizza, restaurant, price)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create price: {}", e))?;
        println!(
            "  {} {} at {} for ${}",
            "+".green(),
            pizza.name.cyan(),
            restaurant.name.cyan(),
            price.to_string().bright_yellow()
        );
    }

    println!();
    println!("{}", "✅ Seed complete".green().bold());

    Ok(())
}

/// Deletes every row of the three tables in one transaction.
async fn clear_tables(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    for table in ["restaurant_pizzas", "restaurants", "pizzas"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to clear {table}"))?;
    }

    tx.commit().await?;
    Ok(())
}

/// Dispatches restaurant commands.
async fn handle_restaurant_action(action: RestaurantAction, pool: &SqlitePool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let service = RestaurantService::new(
        Arc::new(SqliteRestaurantRepository::new(pool.clone())),
        Arc::new(SqliteRestaurantPizzaRepository::new(pool)),
    );

    match action {
        RestaurantAction::Add { name, address } => {
            let restaurant = service
                .create_restaurant(name, address)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create restaurant: {}", e))?;

            println!(
                "{} Restaurant #{} {} ({})",
                "✅".green(),
                restaurant.id,
                restaurant.name.cyan(),
                restaurant.address
            );
        }
    }

    Ok(())
}

/// Dispatches pizza commands.
async fn handle_pizza_action(action: PizzaAction, pool: &SqlitePool) -> Result<()> {
    let service = PizzaService::new(Arc::new(SqlitePizzaRepository::new(Arc::new(
        pool.clone(),
    ))));

    match action {
        PizzaAction::Add { name, ingredients } => {
            let pizza = service
                .create_pizza(name, ingredients)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create pizza: {}", e))?;

            println!(
                "{} Pizza #{} {} ({})",
                "✅".green(),
                pizza.id,
                pizza.name.cyan(),
                pizza.ingredients
            );
        }
    }

    Ok(())
}

/// Prints the number of rows in each table.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Restaurants", "restaurants"),
        ("Pizzas", "pizzas"),
        ("Prices", "restaurant_pizzas"),
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;

        println!("  {:<12} {}", label.bright_white(), count.to_string().cyan());
    }

    println!();
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "✅ Database connection successful".green().bold());
            println!("  Database:   {}", database_url.cyan());
            println!("  Migrations: {}", "up to date".cyan());
        }
    }

    Ok(())
}
