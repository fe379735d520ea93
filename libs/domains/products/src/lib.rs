//! Products Domain
//!
//! This module provides the complete domain implementation for the in-memory
//! product catalog: the position-addressed store, the service layer and the
//! HTTP handlers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, identifier extraction, body decoding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Identifier validation, not-found mapping
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │    Store    │  ← Catalog access (trait + in-memory implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Product record, partial-merge rules
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, models::seed_catalog, MemoryProductStore, ProductService};
//!
//! let store = MemoryProductStore::new(seed_catalog());
//! let service = ProductService::new(store);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::MemoryProductStore;
pub use models::{seed_catalog, Product};
pub use service::ProductService;
pub use store::ProductStore;
