//! Shared state for the axum routes.

use std::sync::Arc;

use crate::app::Application;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

impl AppState {
    pub fn new(app: Application) -> Self {
        AppState { app: Arc::new(app) }
    }
}
