//! JSON replies: a status code plus a serializable body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::convention::display_name;

/// The terminal value of a request: written to the response and discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Reply { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Reply::new(StatusCode::OK, body)
    }

    pub fn created(body: Value) -> Self {
        Reply::new(StatusCode::CREATED, body)
    }

    pub fn unprocessable(body: Value) -> Self {
        Reply::new(StatusCode::UNPROCESSABLE_ENTITY, body)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// 404 `{ "error": "<Resource> not found" }` using the singular display name.
    pub fn resource_not_found(resource: &str) -> Self {
        Reply::new(StatusCode::NOT_FOUND, error_body(&format!("{} not found", display_name(resource))))
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Reply::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Server error", "message": message.into() }),
        )
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

/// Body for a path no route matched: the first segment names the resource.
pub fn not_found_body(path: &str) -> Value {
    match path.split('/').nth(1).filter(|s| !s.is_empty()) {
        Some(resource) => error_body(&format!("{} not found", display_name(resource))),
        None => error_body("Not Found"),
    }
}
