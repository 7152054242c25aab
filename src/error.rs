//! Typed errors and the per-request failure wrapper.

use std::backtrace::Backtrace;

use axum::http::StatusCode;
use thiserror::Error;

use crate::record::ValidationErrors;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid resource name: '{0}' (expected lowercase letters, digits and underscores)")]
    InvalidResourceName(String),
    #[error("routes directory {path}: {source}")]
    RoutesDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for {key}: {message}")]
    Env { key: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    HandlerContract(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Status used by the verbose (development) error presentation.
    pub fn development_status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(format!("serialization: {}", e))
    }
}

/// An error that escaped the dispatch pipeline, tagged with the components
/// that were running when it happened.
#[derive(Debug)]
pub struct Failure {
    pub error: AppError,
    pub controller: String,
    pub handler: String,
    pub backtrace: Backtrace,
}

impl Failure {
    pub fn new(error: AppError, controller: impl Into<String>, handler: impl Into<String>) -> Self {
        Failure {
            error,
            controller: controller.into(),
            handler: handler.into(),
            backtrace: Backtrace::force_capture(),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (controller {}, handler {})", self.error, self.controller, self.handler)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
