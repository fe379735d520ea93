//! Raw request body extractor.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::Response,
};

use crate::errors::error_response;

/// Buffers the complete request body before the handler runs.
///
/// Handlers that must inspect headers and body in a fixed order take this
/// instead of a deserializing extractor. A failed body read is reported as an
/// internal error, not a client error.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::RawBody;
///
/// async fn create(RawBody(body): RawBody) -> String {
///     format!("read {} bytes", body.len())
/// }
/// ```
pub struct RawBody(pub Bytes);

impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(RawBody(bytes)),
            Err(rejection) => {
                tracing::error!("Failed to read request body: {}", rejection.body_text());
                Err(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    rejection.body_text(),
                ))
            }
        }
    }
}
