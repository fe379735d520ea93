//! Products API - in-memory catalog REST server

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{seed_catalog, MemoryProductStore, ProductService};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Non-persistent by design: the catalog lives and dies with the process.
    let store = MemoryProductStore::new(seed_catalog());
    let service = ProductService::new(store);

    let app = create_router::<openapi::ApiDoc>(api::routes(service)).fallback(api::greeting);

    info!("Starting products API on {}", config.server.address());

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
