//! Application error boundary: logs failures that escaped the pipeline and
//! renders them, verbosely in development and sanitized everywhere else.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Environment;
use crate::error::Failure;
use crate::request::ResourceRequest;
use crate::response::Reply;

/// Symbol prefixes of frames that belong to the runtime, the HTTP stack or
/// this framework rather than to the application.
const INTERNAL_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "tokio::",
    "axum::",
    "axum_core::",
    "hyper::",
    "hyper_util::",
    "tower::",
    "tower_http::",
    "futures",
    "async_trait",
    "tracing",
    "mk_framework::",
    "__rust",
    "rust_begin_unwind",
    "__libc",
];

#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub path: String,
    pub method: String,
    pub params: Map<String, Value>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Trace {
    pub relevant: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub request_info: RequestInfo,
    pub trace: Trace,
}

/// Drops every parameter whose key mentions a password.
pub fn sanitize_params(params: &Map<String, Value>) -> Map<String, Value> {
    params
        .iter()
        .filter(|(k, _)| !k.to_lowercase().contains("password"))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub fn report(request: &ResourceRequest, failure: &Failure) -> ErrorReport {
    ErrorReport {
        request_info: RequestInfo {
            path: request.path.clone(),
            method: request.method.to_string(),
            params: sanitize_params(&request.params),
            message: failure.error.to_string(),
            controller: Some(failure.controller.clone()),
            handler: Some(failure.handler.clone()),
        },
        trace: Trace {
            relevant: relevant_frames(&failure.backtrace.to_string()),
        },
    }
}

/// Logs the failure and turns it into the client-facing reply.
pub fn render(environment: Environment, request: &ResourceRequest, failure: &Failure) -> Reply {
    let report = report(request, failure);
    let payload = serde_json::to_value(&report).unwrap_or(Value::Null);
    tracing::error!(
        error = %failure.error,
        controller = %failure.controller,
        handler = %failure.handler,
        report = %payload,
        "unhandled error"
    );
    if environment.is_development() {
        Reply::new(failure.error.development_status(), payload)
    } else {
        Reply::server_error("An unexpected error occurred")
    }
}

/// Application frames from a rendered backtrace, as `symbol at file:line`.
pub fn relevant_frames(trace: &str) -> Vec<String> {
    let lines: Vec<&str> = trace.lines().map(str::trim).collect();
    let mut frames = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let Some((index, symbol)) = line.split_once(": ") else {
            continue;
        };
        if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if is_internal(symbol) {
            continue;
        }
        match lines.get(i + 1).and_then(|next| next.strip_prefix("at ")) {
            Some(location) => frames.push(format!("{} at {}", symbol, location)),
            None => frames.push(symbol.to_string()),
        }
    }
    frames
}

fn is_internal(symbol: &str) -> bool {
    let s = symbol.trim_start_matches('<');
    let head = s.split(" as ").next().unwrap_or(s);
    !head.contains("::") || INTERNAL_PREFIXES.iter().any(|p| head.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::Action;
    use crate::error::AppError;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    fn request() -> ResourceRequest {
        ResourceRequest {
            method: Method::POST,
            path: "/users".into(),
            resource: "users".into(),
            action: Action::Create,
            params: json!({ "name": "Ann", "password": "x", "password_confirmation": "x", "Old_Password": "y" })
                .as_object()
                .cloned()
                .unwrap(),
        }
    }

    #[test]
    fn password_keys_are_removed() {
        let params = sanitize_params(&request().params);
        assert_eq!(Value::Object(params), json!({ "name": "Ann" }));
    }

    #[test]
    fn development_returns_the_report() {
        let failure = Failure::new(AppError::Internal("boom".into()), "UsersCreateController", "UsersCreateHandler");
        let reply = render(Environment::Development, &request(), &failure);
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        let info = &reply.body["request_info"];
        assert_eq!(info["path"], "/users");
        assert_eq!(info["method"], "POST");
        assert_eq!(info["message"], "internal: boom");
        assert_eq!(info["params"], json!({ "name": "Ann" }));
        assert_eq!(info["controller"], "UsersCreateController");
        assert!(reply.body["trace"]["relevant"].is_array());
    }

    #[test]
    fn development_status_tracks_error_kind() {
        let failure = Failure::new(AppError::NotFound("row".into()), "C", "H");
        assert_eq!(render(Environment::Development, &request(), &failure).status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_environments_are_sanitized() {
        for env in [Environment::Test, Environment::Production] {
            let failure = Failure::new(AppError::NotFound("secret detail".into()), "C", "H");
            let reply = render(env, &request(), &failure);
            assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                reply.body,
                json!({ "error": "Server error", "message": "An unexpected error occurred" })
            );
        }
    }

    #[test]
    fn internal_frames_are_filtered() {
        let trace = "\
   0: std::backtrace::Backtrace::force_capture
             at /rustc/library/std/src/backtrace.rs:310:9
   1: mk_framework::error::Failure::new
             at ./src/error.rs:70:24
   2: <todo_app::todos::TodosShowController as mk_framework::controller::Controller>::execute::{{closure}}
             at ./sample_app/src/todos.rs:40:9
   3: <F as axum::handler::Handler<(M,T1),S>>::call::{{closure}}
   4: tokio::runtime::task::harness::poll_future
   5: todo_app::main
             at ./sample_app/src/main.rs:12:5
   6: main";
        assert_eq!(
            relevant_frames(trace),
            vec![
                "<todo_app::todos::TodosShowController as mk_framework::controller::Controller>::execute::{{closure}} at ./sample_app/src/todos.rs:40:9".to_string(),
                "todo_app::main at ./sample_app/src/main.rs:12:5".to_string(),
            ]
        );
    }
}
