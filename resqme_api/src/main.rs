mod config;
mod error;
mod fallback;
mod navigate;
mod routes;
mod state;

#[cfg(test)]
mod test_utils;

use crate::config::Config;
use crate::routes::router;
use crate::state::AppState;
use axum::serve;
use resqme_core::hazards::FileHazardSource;
use resqme_ors::OrsDirectionsClient;
use std::sync::Arc;
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = Config::from_env()?;

    info!(
        "Routing through {} (timeout {:?}), hazards from {:?}, fallback {:?}",
        config.ors.base_url, config.ors.timeout, config.hazard_file, config.fallback
    );

    let state = Arc::new(AppState {
        ors_client: OrsDirectionsClient::new(config.ors)?,
        hazards: Arc::new(FileHazardSource::new(config.hazard_file)),
        fallback: config.fallback,
    });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, app).await?;

    Ok(())
}
