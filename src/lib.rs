//! MK Framework: convention-over-configuration resource routing with a
//! two-stage controller/handler pipeline on top of axum.

pub mod app;
pub mod boundary;
pub mod component;
pub mod config;
pub mod controller;
pub mod convention;
pub mod error;
pub mod extractors;
pub mod handler;
pub mod record;
pub mod registry;
pub mod request;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use app::{Application, ApplicationBuilder};
pub use config::{Environment, FrameworkConfig};
pub use controller::{Controller, Outcome};
pub use convention::Action;
pub use error::{AppError, ConfigError, Failure};
pub use handler::{HandlerContext, Handler, HandlerOutput, Responders};
pub use record::{Model, Record, ValidationErrors};
pub use request::ResourceRequest;
pub use response::Reply;
pub use service::{validate_fields, validate_model, ValidationRule};
pub use state::AppState;
pub use store::{MemoryStore, Persisted};
pub use telemetry::init_tracing;
