//! Server-rendered HTML pages.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;
