//! Health check endpoints

use axum::{http::StatusCode, routing::get, Json, Router};
use domain_products::{MemoryProductStore, ProductService};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

fn health_response(status: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: status.to_string(),
        service: "products-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    health_response("healthy")
}

async fn ready(
    service: ProductService<MemoryProductStore>,
) -> Result<Json<HealthResponse>, StatusCode> {
    // Ready once the catalog can be read.
    service
        .list_products()
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    Ok(health_response("ready"))
}

pub fn router(service: ProductService<MemoryProductStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(move || ready(service)))
}
