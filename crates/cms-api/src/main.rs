//! CMS API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p cms-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use cms_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Tracing depends on APP_ENV, so configuration is loaded first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting CMS API Server..."
    );

    if let Err(e) = cms_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
