mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let explicit = env::var("CONFIG_PATH").ok();
    let required = explicit.is_some();
    let config_path = explicit.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = load_from(&config_path, required).await?;
    apply_port_override(&mut config, env::var("PORT").ok())?;

    Ok(config)
}

/// Reads a YAML config file. A missing file falls back to defaults unless
/// `required` is set.
pub async fn load_from(config_path: &str, required: bool) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(s) => s,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(&config_str)?;
    Ok(config)
}

pub fn apply_port_override(config: &mut Config, port: Option<String>) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }
    Ok(())
}
