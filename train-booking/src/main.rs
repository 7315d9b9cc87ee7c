use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use train_booking::config::ServerConfig;
use train_booking::repository::{InMemoryTrainRepository, seed_repository};
use train_booking::web::{AppState, create_router};

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
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let repository = InMemoryTrainRepository::new();

    // Seed bookings (fail fast if the file is unusable)
    if let Some(path) = &config.fixture_path {
        match seed_repository(&repository, path) {
            Ok(trains) => info!(count = trains.len(), path = %path.display(), "loaded trains"),
            Err(e) => {
                error!("failed to load fixture: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let app = create_router(AppState::new(repository));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.bind_addr, "train booking service listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
