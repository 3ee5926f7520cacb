use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // color-eyre before anything fallible, tracing before anything noisy
    install_color_eyre();
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        url = %config.mongodb.url(),
        database = %config.mongodb.database(),
        "Connecting to MongoDB"
    );
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    info!("MongoDB connection established");

    let state = AppState::new(config, mongo_client);

    // Versioned API under /api/v1 plus the doc UIs, then the health
    // endpoints at the root
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state)).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    info!(address = %state.config.server.address(), "Starting item API");

    let mongo_client = state.mongo_client.clone();
    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Closing MongoDB connection pool");
        drop(mongo_client);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Item API shutdown complete");
    Ok(())
}
