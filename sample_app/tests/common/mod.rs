#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use mk_framework::{Environment, FrameworkConfig};
use serde_json::Value;
use tower::ServiceExt;

use todo_app::{build_app, Stores, ROUTES_DIR};

pub fn app(stores: &Stores) -> Router {
    app_in(Environment::Test, stores)
}

pub fn app_in(environment: Environment, stores: &Stores) -> Router {
    let config = FrameworkConfig::default()
        .with_environment(environment)
        .with_routes_path(ROUTES_DIR);
    build_app(config, stores).unwrap().router()
}

pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
