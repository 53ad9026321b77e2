//! Application bootstrap: logging and configuration resolution.

pub mod logging;

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::Result;

/// Resolve the effective configuration: file values, then environment
/// overrides, then CLI flags.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    port: Option<u16>,
    max_upload_mb: Option<u64>,
) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(|| PathBuf::from("tandem.toml"));
    let mut config = AppConfig::load(&path)?;
    config.merge_env_vars();
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(limit) = max_upload_mb {
        config.max_upload_mb = limit;
    }
    Ok(config)
}
