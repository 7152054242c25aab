//! Framework configuration.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment environment. Only `Development` gets verbose error payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    /// Unknown values are treated as production.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "development" => Environment::Development,
            "test" => Environment::Test,
            _ => Environment::Production,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameworkConfig {
    #[serde(default = "default_environment")]
    pub environment: Environment,
    /// Directory whose immediate subdirectories name the resources.
    #[serde(default = "default_routes_path")]
    pub routes_path: PathBuf,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        FrameworkConfig {
            environment: default_environment(),
            routes_path: default_routes_path(),
            bind_addr: default_bind_addr(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl FrameworkConfig {
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_routes_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.routes_path = path.into();
        self
    }
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_routes_path() -> PathBuf {
    PathBuf::from("routes")
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".into()
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}
