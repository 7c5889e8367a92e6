use anyhow::Result;
use diabetest_api::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG takes precedence and may hold a full filter directive
    let env_filter = EnvFilter::try_from_default_env();
    if env_filter.is_err() {
        if let Err(e) = validate_log_level(&config.server.logs.level) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter.or_else(|_| EnvFilter::try_new(&config.server.logs.level))?)
        .json()
        .init();

    info!(
        "Starting DiabeTest API v{} on port {}",
        env!("CARGO_PKG_VERSION"),
        config.server.port
    );
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
