//! Runtime configuration for the tandem service.
//!
//! Values come from a TOML file when present, then environment variables,
//! then CLI flags, last writer wins.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Uploads larger than this are rejected before the pipeline runs.
    pub max_upload_mb: u64,
    /// CORS origin allowed to call the API; unset means permissive.
    pub allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            allowed_origin: None,
        }
    }
}

impl AppConfig {
    /// Load from a TOML file, falling back to defaults when the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Environment variables override file values.
    pub fn merge_env_vars(&mut self) {
        if let Ok(port) = std::env::var("TANDEM_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        if let Ok(limit) = std::env::var("TANDEM_MAX_UPLOAD_MB") {
            if let Ok(limit) = limit.parse() {
                self.max_upload_mb = limit;
            }
        }
        if let Ok(origin) = std::env::var("TANDEM_ALLOWED_ORIGIN") {
            if !origin.is_empty() {
                self.allowed_origin = Some(origin);
            }
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb as usize * 1024 * 1024
    }
}
