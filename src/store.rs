//! In-memory storage collaborator. Rows are keyed by integer id (from 1) and
//! carry implicit `created_at` / `updated_at` timestamps.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::record::{Model, Record, ValidationErrors};

#[derive(Clone, Debug)]
struct Row<T> {
    attrs: T,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, Row<T>>,
    next_id: u64,
}

/// Shared handle to one table. Cloning is cheap; all clones see the same rows.
pub struct MemoryStore<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        MemoryStore {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T: Model> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Model> MemoryStore<T> {
    pub fn new() -> Self {
        MemoryStore {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// All rows in id (insertion) order.
    pub fn all(&self) -> Result<Vec<Persisted<T>>, AppError> {
        self.filter(|_| true)
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Result<Vec<Persisted<T>>, AppError> {
        let table = self.read()?;
        Ok(table
            .rows
            .iter()
            .filter(|(_, row)| pred(&row.attrs))
            .map(|(id, row)| self.persisted(*id, row))
            .collect())
    }

    /// Lookup by id; `None` when absent.
    pub fn find(&self, id: u64) -> Result<Option<Persisted<T>>, AppError> {
        let table = self.read()?;
        Ok(table.rows.get(&id).map(|row| self.persisted(id, row)))
    }

    /// Lookup by id; absence is an error.
    pub fn fetch(&self, id: u64) -> Result<Persisted<T>, AppError> {
        self.find(id)?
            .ok_or_else(|| AppError::NotFound(format!("no row with id {}", id)))
    }

    /// A new, unsaved record.
    pub fn build(&self, attrs: T) -> Persisted<T> {
        Persisted {
            store: self.clone(),
            id: None,
            attrs,
            created_at: None,
            updated_at: None,
            errors: ValidationErrors::new(),
            rejected: ValidationErrors::new(),
        }
    }

    /// Validates and inserts. Validation failure is returned as an error.
    pub fn create(&self, attrs: T) -> Result<Persisted<T>, AppError> {
        let mut errors = ValidationErrors::new();
        attrs.validate(&mut errors);
        errors.into_result()?;
        let mut record = self.build(attrs);
        record.write()?;
        Ok(record)
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }

    fn persisted(&self, id: u64, row: &Row<T>) -> Persisted<T> {
        Persisted {
            store: self.clone(),
            id: Some(id),
            attrs: row.attrs.clone(),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            errors: ValidationErrors::new(),
            rejected: ValidationErrors::new(),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Table<T>>, AppError> {
        self.table.read().map_err(|_| AppError::Internal("store lock".into()))
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, Table<T>>, AppError> {
        self.table.write().map_err(|_| AppError::Internal("store lock".into()))
    }

    fn check_unique(table: &Table<T>, id: Option<u64>, attrs: &T) -> Result<(), AppError> {
        let fields = T::unique_fields();
        if fields.is_empty() {
            return Ok(());
        }
        let candidate = serde_json::to_value(attrs)?;
        for (other_id, row) in &table.rows {
            if Some(*other_id) == id {
                continue;
            }
            let existing = serde_json::to_value(&row.attrs)?;
            for field in fields {
                let value = candidate.get(*field);
                if value.is_some_and(|v| !v.is_null()) && value == existing.get(*field) {
                    return Err(AppError::Conflict(format!("{} must be unique", field)));
                }
            }
        }
        Ok(())
    }
}

/// One row as a [`Record`]: either loaded from the store or built and not yet
/// saved.
pub struct Persisted<T> {
    store: MemoryStore<T>,
    id: Option<u64>,
    attrs: T,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    errors: ValidationErrors,
    /// Values `set` could not convert to the field's type. Kept until the
    /// field is set again and reported by every `save`.
    rejected: ValidationErrors,
}

impl<T: Model> Persisted<T> {
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn attrs(&self) -> &T {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut T {
        &mut self.attrs
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    fn write(&mut self) -> Result<(), AppError> {
        let mut table = self.store.write_lock()?;
        if let Some(id) = self.id.filter(|id| !table.rows.contains_key(id)) {
            return Err(AppError::NotFound(format!("row {} no longer exists", id)));
        }
        MemoryStore::<T>::check_unique(&table, self.id, &self.attrs)?;
        let now = Utc::now();
        let id = match self.id {
            Some(id) => id,
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };
        let created_at = self.created_at.unwrap_or(now);
        table.rows.insert(
            id,
            Row {
                attrs: self.attrs.clone(),
                created_at,
                updated_at: now,
            },
        );
        self.id = Some(id);
        self.created_at = Some(created_at);
        self.updated_at = Some(now);
        Ok(())
    }
}

#[async_trait]
impl<T: Model> Record for Persisted<T> {
    fn to_json(&self) -> Value {
        let mut obj = match serde_json::to_value(&self.attrs) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                let mut map = Map::new();
                map.insert("value".into(), other);
                map
            }
            Err(_) => Map::new(),
        };
        obj.insert("id".into(), self.id.map(Value::from).unwrap_or(Value::Null));
        obj.insert("created_at".into(), timestamp(self.created_at));
        obj.insert("updated_at".into(), timestamp(self.updated_at));
        Value::Object(obj)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), AppError> {
        let mut obj = match serde_json::to_value(&self.attrs)? {
            Value::Object(map) => map,
            _ => return Err(AppError::BadRequest(format!("cannot set {} on a non-object model", field))),
        };
        obj.insert(field.to_string(), value);
        self.rejected.remove(field);
        match serde_json::from_value(Value::Object(obj)) {
            Ok(attrs) => self.attrs = attrs,
            Err(e) => {
                tracing::debug!(field, error = %e, "rejected value of the wrong type");
                self.rejected.add(field, "is invalid");
            }
        }
        Ok(())
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }

    async fn save(&mut self) -> Result<bool, AppError> {
        self.errors.clear();
        self.errors.merge(self.rejected.clone());
        self.attrs.validate(&mut self.errors);
        if !self.errors.is_empty() {
            return Ok(false);
        }
        self.write()?;
        Ok(true)
    }

    async fn delete(&mut self) -> Result<bool, AppError> {
        let Some(id) = self.id else {
            return Ok(false);
        };
        let mut table = self.store.write_lock()?;
        Ok(table.rows.remove(&id).is_some())
    }
}

fn timestamp(at: Option<DateTime<Utc>>) -> Value {
    at.map(|t| Value::String(t.to_rfc3339())).unwrap_or(Value::Null)
}
