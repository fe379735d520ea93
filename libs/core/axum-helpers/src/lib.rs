//! # Axum Helpers
//!
//! A small collection of utilities shared by Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Server setup, OpenAPI document route, graceful shutdown
//! - **[`errors`]**: The shared JSON error body shape
//! - **[`extractors`]**: Custom extractors (raw request body)

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export server types
pub use server::{create_app, create_router, shutdown_signal};

// Re-export error types
pub use errors::{error_response, ErrorBody};

// Re-export extractors
pub use extractors::RawBody;
