use std::process::ExitCode;

use commission_engine::api::{AppState, create_router};
use commission_engine::config::ConfigLoader;
use commission_engine::telemetry;
use tracing::{error, info};

/// Environment variable naming the configuration directory.
const CONFIG_DIR_ENV: &str = "COMMISSION_ENGINE_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> ExitCode {
    let config_dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration from {}: {}", config_dir, err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = telemetry::init(&config.config().telemetry) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    let bind_address = config.bind_address().to_string();
    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_address = %bind_address, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(
        bind_address = %bind_address,
        config_dir = %config_dir,
        version = env!("CARGO_PKG_VERSION"),
        "Commission engine listening"
    );

    let router = create_router(AppState::new(&config));
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server exited with error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
