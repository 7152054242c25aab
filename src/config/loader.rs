//! Load configuration from the environment and discover resources on disk.

use std::path::Path;

use crate::config::types::{Environment, FrameworkConfig};
use crate::config::validate;
use crate::error::ConfigError;

pub const ENV_ENVIRONMENT: &str = "MK_ENV";
pub const ENV_ROUTES_PATH: &str = "MK_ROUTES_PATH";
pub const ENV_BIND_ADDR: &str = "MK_BIND_ADDR";
pub const ENV_MAX_BODY_BYTES: &str = "MK_MAX_BODY_BYTES";

impl FrameworkConfig {
    /// Reads `MK_ENV`, `MK_ROUTES_PATH`, `MK_BIND_ADDR` and
    /// `MK_MAX_BODY_BYTES`, falling back to defaults, then validates.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = FrameworkConfig::default();
        if let Some(env) = lookup(ENV_ENVIRONMENT) {
            config.environment = env.parse::<Environment>().unwrap_or(Environment::Production);
        }
        if let Some(path) = lookup(ENV_ROUTES_PATH).filter(|s| !s.is_empty()) {
            config.routes_path = path.into();
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR).filter(|s| !s.is_empty()) {
            config.bind_addr = addr;
        }
        if let Some(bytes) = lookup(ENV_MAX_BODY_BYTES) {
            config.max_body_bytes = bytes.trim().parse().map_err(|e| ConfigError::Env {
                key: ENV_MAX_BODY_BYTES,
                message: format!("{}", e),
            })?;
        }
        validate(&config)?;
        Ok(config)
    }
}

/// Names of the immediate subdirectories of `routes_path`, sorted. A missing
/// directory yields no resources.
pub fn discover_resources(routes_path: &Path) -> Result<Vec<String>, ConfigError> {
    if !routes_path.is_dir() {
        tracing::debug!(path = %routes_path.display(), "routes directory not found, no resources discovered");
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(routes_path).map_err(|e| routes_dir_error(routes_path, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| routes_dir_error(routes_path, e))?;
        if entry.path().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// File stems of the `.rs` files in a component directory, sorted. Missing
/// directories yield nothing.
pub fn component_stems(dir: &Path) -> Result<Vec<String>, ConfigError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(dir).map_err(|e| routes_dir_error(dir, e))?;
    let mut stems = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| routes_dir_error(dir, e))?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if stem != "mod" {
                    stems.push(stem.to_string());
                }
            }
        }
    }
    stems.sort();
    Ok(stems)
}

fn routes_dir_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::RoutesDir {
        path: path.display().to_string(),
        source,
    }
}
