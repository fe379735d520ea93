use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::errors::error_response;
use thiserror::Error;

/// Everything a products endpoint can answer with besides success.
///
/// Each variant's display string is the exact `error` field of the JSON body.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// Identifier outside `[0, len)`
    #[error("doesn't exist")]
    DoesNotExist,

    /// The path carries no identifier segment
    #[error("not found")]
    IdMissing,

    /// The identifier segment is not a base-10 integer
    #[error("not id")]
    IdNotNumeric,

    #[error("invalid method")]
    InvalidMethod,

    // The unbalanced quote is part of the wire contract; clients match on it.
    #[error("content type 'application/json required")]
    UnsupportedMediaType,

    /// Body failed to decode as a product; carries the parser's message
    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DoesNotExist | Self::IdMissing | Self::IdNotNumeric => StatusCode::NOT_FOUND,
            Self::InvalidMethod => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::info!("{}", self);
        }
        error_response(status, self.to_string())
    }
}
