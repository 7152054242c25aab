//! Merge query string and request body into one parameter map.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::{Map, Value};

use crate::response::error_body;

/// Request parameters: query string values as strings, overlaid by the keys of
/// the body. A form-urlencoded body contributes string values; any other body
/// must be a JSON object. An empty body contributes nothing.
#[derive(Clone, Debug, Default)]
pub struct RequestParams(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for RequestParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = Map::new();
        if req.uri().query().is_some() {
            let Query(query) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
                .map_err(|_| bad_request("Invalid query string"))?;
            params.extend(query.into_iter().map(|(k, v)| (k, Value::String(v))));
        }

        if is_form(req.headers()) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            params.extend(fields.into_iter().map(|(k, v)| (k, Value::String(v))));
            return Ok(RequestParams(params));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(RequestParams(params));
        }
        match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(fields)) => params.extend(fields),
            Ok(_) => return Err(bad_request("Request body must be a JSON object")),
            Err(e) => {
                tracing::debug!(error = %e, "rejecting malformed JSON body");
                return Err(bad_request("Invalid JSON body"));
            }
        }
        Ok(RequestParams(params))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(error_body(message))).into_response()
}
