use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use climate_server::config::ServerConfig;
use climate_server::store::ClimateStore;
use climate_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let store = match ClimateStore::connect(&config.store) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to configure measurement store");
            return ExitCode::FAILURE;
        }
    };

    // Keep serving even if the store is down; requests will answer 500.
    if let Err(e) = store.ping().await {
        warn!(error = %e, "Measurement store is not reachable yet");
    }

    let state = AppState::new(store.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "Hawaii Climate API listening");
    info!("  GET  /api/v1.0/precipitation");
    info!("  GET  /api/v1.0/stations");
    info!("  GET  /api/v1.0/tobs");
    info!("  GET  /api/v1.0/<start>");
    info!("  GET  /api/v1.0/<start>/<end>");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    info!("Measurement store closed");

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

/// Resolve when ctrl-c is received. Never resolves if the handler can't be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
