//! Application error type and its HTTP representation.
//!
//! Every layer returns [`AppError`]. Handlers propagate it with `?` and the
//! [`IntoResponse`] implementation turns it into one of the fixed JSON bodies
//! the API exposes. Internal details (SQL errors, constraint names) are logged
//! and never written to the response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::response::PrettyJson;

/// Message returned inside the `errors` array for every rejected price.
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorBody {
    Single { error: String },
    Many { errors: Vec<String> },
}

impl ErrorBody {
    fn single(message: impl Into<String>) -> Self {
        Self::Single {
            error: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced entity does not exist. The message is sent to the client.
    #[error("{message}")]
    NotFound { message: String },

    /// Input failed a validation rule. The reason is only logged.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// No route matches the request path.
    #[error("route not found")]
    RouteNotFound,

    /// The request could not be parsed.
    #[error("bad request: {reason}")]
    BadRequest { reason: String },

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::NotFound { message } => ErrorBody::single(message),
            AppError::Validation { reason } => {
                tracing::debug!(reason = %reason, "Request rejected by validation");
                ErrorBody::Many {
                    errors: vec![VALIDATION_ERRORS.to_string()],
                }
            }
            AppError::RouteNotFound => ErrorBody::single("Not found"),
            AppError::BadRequest { reason } => {
                tracing::debug!(reason = %reason, "Malformed request");
                ErrorBody::single("Bad request")
            }
            AppError::MethodNotAllowed => ErrorBody::single("Method not allowed"),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error while handling request");
                ErrorBody::single("Internal server error")
            }
            AppError::Internal { message } => {
                tracing::error!(message = %message, "Internal error while handling request");
                ErrorBody::single("Internal server error")
            }
        };

        (status, PrettyJson(body)).into_response()
    }
}
