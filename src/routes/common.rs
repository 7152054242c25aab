//! Root welcome and the not-found fallback.

use axum::http::{StatusCode, Uri};
use serde_json::json;

use crate::response::{not_found_body, Reply};

pub fn welcome() -> Reply {
    Reply::ok(json!({ "message": "Welcome to MK Framework" }))
}

/// Fallback for paths no route shape matches.
pub async fn not_found(uri: Uri) -> Reply {
    tracing::debug!(path = uri.path(), "unmatched path");
    Reply::new(StatusCode::NOT_FOUND, not_found_body(uri.path()))
}
