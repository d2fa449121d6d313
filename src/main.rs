//! People API binary entry point.
//!
//! Loads configuration from the environment, connects to MySQL with a fixed
//! retry policy, and serves the REST API until SIGINT/SIGTERM.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use people_api::config::Config;
use people_api::server;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            Config::log_level_from_env()
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .init();

    tracing::info!("people-api starting...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: host={}, database={}, listen={}, log_level={}",
        config.db_host,
        config.db_name,
        config.listen_addr,
        config.log_level
    );

    if let Err(e) = server::run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("people-api shutdown complete");
}
