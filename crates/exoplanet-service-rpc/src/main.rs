//! Exoplanet dataset JSON-RPC HTTP service.
//!
//! Serves a JSON dataset of exoplanet records that is loaded into memory at
//! startup and can be replaced wholesale over HTTP.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness text
//! - `POST /rpc` - JSON-RPC 2.0: `getAllPlanets`, `getPlanetByName`,
//!   `getPlanetsByDiscYear`, `getPlanetsByHostname`
//! - `POST /update-local-data` - Replace and persist the whole dataset
//!
//! # Configuration
//!
//! - `PLANETS_DATA_PATH` - Path to the dataset document (default: planets-data.json)
//! - `SERVICE_PORT` - HTTP port (default: 3000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use tracing::{error, info};

use exoplanet_service_shared::{build_router, init_logging, AppState, LoggingConfig, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("rpc");
    init_logging(&logging_config)?;

    let config = ServiceConfig::from_env();
    info!(
        data_path = %config.data_path.display(),
        port = config.port,
        "starting exoplanet rpc service"
    );

    // Load before binding so no request sees an uninitialized dataset
    let state = AppState::load(&config.data_path).await;
    info!(
        records = state.store().snapshot().await.len(),
        "application state loaded"
    );

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "failed to bind listener");
        e
    })?;
    info!(addr = %addr, "JSON-RPC server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal, draining connections");
}
