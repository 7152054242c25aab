//! Controllers and handlers, one file per action under
//! `<resource>/{controllers,handlers}`.

pub mod comments;
pub mod posts;
pub mod todos;

use mk_framework::{AppError, MemoryStore, Model, Outcome, Record, Reply, ResourceRequest};
use serde_json::json;

/// Factory that hands each new component its own clone of `store`.
pub(crate) fn with_store<S, C>(store: &S, make: fn(S) -> C) -> impl Fn() -> C + Send + Sync + 'static
where
    S: Clone + Send + Sync + 'static,
    C: 'static,
{
    let store = store.clone();
    move || make(store.clone())
}

/// Copies the listed fields that are present in the request onto `record`.
pub(crate) fn assign(record: &mut dyn Record, request: &ResourceRequest, fields: &[&str]) -> Result<(), AppError> {
    for field in fields {
        if let Some(value) = request.param(field) {
            record.set(field, value.clone())?;
        }
    }
    Ok(())
}

/// The record named by the `id` path parameter, or `Missing`.
pub(crate) fn find_member<T: Model>(store: &MemoryStore<T>, request: &ResourceRequest) -> Result<Outcome, AppError> {
    match request.id() {
        Some(id) => Ok(Outcome::found(store.find(id)?)),
        None => Ok(Outcome::Missing),
    }
}

pub(crate) fn validation_failed(record: &dyn Record) -> Reply {
    Reply::unprocessable(json!({
        "error": "Validation failed",
        "details": record.errors().to_json(),
    }))
}
