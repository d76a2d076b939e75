//! Handlers for requests no route accepts.

use crate::error::AppError;

/// Any path without a route: 404 `{"error": "Not found"}`.
pub async fn not_found_handler() -> AppError {
    AppError::RouteNotFound
}

/// Known path, unsupported method: 405 `{"error": "Method not allowed"}`.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
