//! Per-request dispatch context handed to controllers and handlers.

use axum::http::Method;
use serde_json::{Map, Value};

use crate::convention::Action;
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct ResourceRequest {
    pub method: Method,
    pub path: String,
    /// The resource being dispatched; for nested routes this is the child.
    pub resource: String,
    pub action: Action,
    pub params: Map<String, Value>,
}

impl ResourceRequest {
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    /// Numeric parameter; accepts JSON numbers and numeric strings.
    pub fn param_u64(&self, key: &str) -> Option<u64> {
        match self.params.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The member id from the path, when it is numeric.
    pub fn id(&self) -> Option<u64> {
        self.param_u64("id")
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn require(&self, key: &str) -> Result<&Value, AppError> {
        self.params
            .get(key)
            .ok_or_else(|| AppError::BadRequest(format!("missing parameter: {}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(params: Value) -> ResourceRequest {
        ResourceRequest {
            method: Method::GET,
            path: "/todos/3".into(),
            resource: "todos".into(),
            action: Action::Show,
            params: params.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn numeric_params_parse_from_strings_and_numbers() {
        let req = request(json!({ "id": "3", "post_id": 7, "title": "x" }));
        assert_eq!(req.id(), Some(3));
        assert_eq!(req.param_u64("post_id"), Some(7));
        assert_eq!(req.param_u64("title"), None);
        assert_eq!(req.param_str("title"), Some("x"));
    }

    #[test]
    fn require_reports_the_missing_key() {
        let req = request(json!({}));
        match req.require("title") {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "missing parameter: title"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
