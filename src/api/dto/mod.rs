//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs are built explicitly per endpoint; nothing serializes a
//! domain entity with its relationships recursively. Fields are declared in
//! alphabetical order so the rendered JSON has sorted keys.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
