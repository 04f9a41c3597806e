use std::sync::Arc;

use pacdle::colors::ColorSynonymTable;
use pacdle::constants::DEFAULT_TEAMS_PATH;
use pacdle::env_config;
use pacdle::server::{create_router, AppState};
use pacdle::storage::load_teams;
use pacdle::types::GameContext;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    env_config::init_base_path();
    tracing::info!("Starting Pacdle API server...");

    let teams = match load_teams(DEFAULT_TEAMS_PATH) {
        Ok(teams) => teams,
        Err(e) => {
            tracing::error!(error = %e, "failed to load team dataset");
            std::process::exit(1);
        }
    };

    let ctx = GameContext::new(teams, ColorSynonymTable::builtin());
    let state = Arc::new(AppState::new(ctx));
    let app = create_router(state);

    let port = env_config::server_port();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("failed to bind server port");
    tracing::info!(port, "Server is running. Press Ctrl+C to stop.");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("Stopping server...");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
