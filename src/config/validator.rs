//! Config validation: bind address, body limit, resource names.

use std::net::SocketAddr;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::FrameworkConfig;
use crate::error::ConfigError;

pub fn validate(config: &FrameworkConfig) -> Result<(), ConfigError> {
    config
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::Env {
            key: crate::config::ENV_BIND_ADDR,
            message: format!("{}: {}", config.bind_addr, e),
        })?;
    if config.max_body_bytes == 0 {
        return Err(ConfigError::Env {
            key: crate::config::ENV_MAX_BODY_BYTES,
            message: "must be greater than zero".into(),
        });
    }
    Ok(())
}

fn resource_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("static pattern"))
}

/// Resource names become path segments and component-name prefixes.
pub fn validate_resource_name(name: &str) -> Result<(), ConfigError> {
    if resource_name_re().is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidResourceName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_names() {
        for ok in ["todos", "blog_posts", "v2items"] {
            assert!(validate_resource_name(ok).is_ok(), "{}", ok);
        }
        for bad in ["", "Todos", "2fast", "todo-items", "a/b", "todos "] {
            assert!(validate_resource_name(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn bind_address_must_parse() {
        let mut config = FrameworkConfig::default();
        assert!(validate(&config).is_ok());
        config.bind_addr = "localhost".into();
        assert!(matches!(validate(&config), Err(ConfigError::Env { .. })));
    }

    #[test]
    fn zero_body_limit_is_invalid() {
        let config = FrameworkConfig {
            max_body_bytes: 0,
            ..FrameworkConfig::default()
        };
        assert!(validate(&config).is_err());
    }
}
