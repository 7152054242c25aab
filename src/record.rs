//! The storage contract the pipeline persists through.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

/// Field-level validation messages, serialized as `{ "field": ["message"] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        ValidationErrors(BTreeMap::new())
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{} {}", field, m)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// A persisted (or persistable) domain object as handlers and the pipeline
/// see it.
#[async_trait]
pub trait Record: Send + Sync {
    /// Plain key/value representation for JSON output.
    fn to_json(&self) -> Value;

    fn get(&self, field: &str) -> Option<Value> {
        self.to_json().get(field).cloned()
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), AppError>;

    /// Errors left by the last failed save.
    fn errors(&self) -> &ValidationErrors;

    fn errors_mut(&mut self) -> &mut ValidationErrors;

    /// `Ok(false)` when validation rejected the write.
    async fn save(&mut self) -> Result<bool, AppError>;

    /// `Ok(false)` when there was nothing to delete.
    async fn delete(&mut self) -> Result<bool, AppError>;
}

/// A domain type stored through [`MemoryStore`](crate::store::MemoryStore).
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    fn validate(&self, _errors: &mut ValidationErrors) {}

    /// Columns with a uniqueness constraint enforced by the store.
    fn unique_fields() -> &'static [&'static str] {
        &[]
    }
}
