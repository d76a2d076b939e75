//! JSON response encoding.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

const INTERNAL_ERROR_BODY: &str = "{\n  \"error\": \"Internal server error\"\n}\n";

/// JSON response rendered with two-space indentation and a trailing newline.
///
/// Field order follows the serialized type, so response DTOs declare their
/// fields alphabetically.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let content_type = [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )];

        match serde_json::to_vec_pretty(&self.0) {
            Ok(mut body) => {
                body.push(b'\n');
                (content_type, body).into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    content_type,
                    INTERNAL_ERROR_BODY,
                )
                    .into_response()
            }
        }
    }
}
