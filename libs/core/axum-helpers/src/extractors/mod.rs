//! Custom extractors for Axum handlers.

pub mod raw_body;

pub use raw_body::RawBody;
