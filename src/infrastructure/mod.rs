//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite connection pool and repository implementations

pub mod persistence;
