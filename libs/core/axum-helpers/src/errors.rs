//! Shared wire shape for error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint: `{"error": "<message>"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Build a JSON error response with the shared body shape.
///
/// The `content-type: application/json` header is set by the `Json` wrapper,
/// so error responses carry the same content type as success responses.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}
