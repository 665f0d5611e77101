// File: services/policyhub_backend/src/main.rs
use policyhub_backend::{build_app, init_schema, AppState};
use policyhub_common::logging;
use policyhub_config::load_config;
use policyhub_db::DbClient;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(load_config()?);
    let db_client = DbClient::new(&config).await?;
    init_schema(&db_client).await?;

    let state = AppState::new(config.clone(), db_client);
    let app = build_app(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        error!("PolicyHub backend stopped: {}", e);
        std::process::exit(1);
    }
}
