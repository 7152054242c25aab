//! Controllers: per-request business logic that loads or builds what the
//! handler will shape.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::record::Record;
use crate::request::ResourceRequest;
use crate::response::Reply;

/// What a controller produced.
pub enum Outcome {
    /// Nothing found. The pipeline answers 404 without running the handler.
    Missing,
    Record(Box<dyn Record>),
    Collection(Vec<Box<dyn Record>>),
    /// Arbitrary composed data, e.g. a record together with its children.
    Data(Value),
    /// Stop here and send this reply; the handler is skipped.
    Halt(Reply),
}

impl Outcome {
    pub fn record(record: impl Record + 'static) -> Self {
        Outcome::Record(Box::new(record))
    }

    pub fn collection<R, I>(records: I) -> Self
    where
        R: Record + 'static,
        I: IntoIterator<Item = R>,
    {
        Outcome::Collection(
            records
                .into_iter()
                .map(|r| Box::new(r) as Box<dyn Record>)
                .collect(),
        )
    }

    /// `Some(record)` becomes `Record`, `None` becomes `Missing`.
    pub fn found<R: Record + 'static>(record: Option<R>) -> Self {
        match record {
            Some(r) => Outcome::record(r),
            None => Outcome::Missing,
        }
    }

    pub fn halt(reply: Reply) -> Self {
        Outcome::Halt(reply)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Missing | Outcome::Data(Value::Null))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Outcome::Missing => "missing",
            Outcome::Record(_) => "record",
            Outcome::Collection(_) => "collection",
            Outcome::Data(_) => "data",
            Outcome::Halt(_) => "halt",
        }
    }
}

#[async_trait]
pub trait Controller: Send + Sync {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError>;
}
