//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and shapes every
//! response body explicitly.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`extract`] - Extractors whose rejections map onto [`crate::error::AppError`]
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`response`] - JSON response encoding
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
