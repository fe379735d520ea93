//! API routes module

pub mod health;

use axum::Router;
use domain_products::{handlers, MemoryProductStore, ProductService};

/// Create all API routes
pub fn routes(service: ProductService<MemoryProductStore>) -> Router {
    Router::new()
        .merge(handlers::router(service.clone()))
        .merge(health::router(service))
}

/// Catch-all greeting for every path and method the API does not claim.
pub async fn greeting() -> &'static str {
    "Hello word \n"
}
