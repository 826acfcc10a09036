mod config;
mod routes;
mod state;
mod store;

use std::process::ExitCode;

use trajectories::samples::sample_trajectories;

use crate::config::ServerConfig;
use crate::store::TrajectoryStore;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let store = match &config.trajectory_file {
        Some(path) => match TrajectoryStore::load(path) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "failed to load trajectories");
                return ExitCode::FAILURE;
            }
        },
        None => {
            tracing::info!("TRAJECTORY_FILE not set; serving sample trajectories");
            TrajectoryStore::from_records(sample_trajectories(time::OffsetDateTime::now_utc()))
        }
    };
    if store.is_empty() {
        tracing::warn!("no trajectories loaded");
    }
    tracing::info!(records = store.len(), "trajectories loaded");

    let app = routes::app(state::AppState::new(store));
    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "trajview listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
