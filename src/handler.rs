//! Handlers: per-request response shaping over a controller's outcome.
//!
//! Read actions (index, show) return a [`Reply`]. Mutating actions return
//! [`Responders`]: the pipeline performs the save or delete and then runs
//! exactly one of the two continuations with the record.

use async_trait::async_trait;
use serde_json::Value;

use crate::controller::Outcome;
use crate::convention::Action;
use crate::error::AppError;
use crate::record::Record;
use crate::request::ResourceRequest;
use crate::response::Reply;

pub type Continuation = Box<dyn FnOnce(&dyn Record) -> Reply + Send>;

/// The success and error continuations of a mutating action. Both are
/// required; a missing one is a contract violation reported as a 500.
#[derive(Default)]
pub struct Responders {
    success: Option<Continuation>,
    error: Option<Continuation>,
}

impl Responders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(mut self, f: impl FnOnce(&dyn Record) -> Reply + Send + 'static) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    pub fn error(mut self, f: impl FnOnce(&dyn Record) -> Reply + Send + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    pub(crate) fn into_pair(self) -> Option<(Continuation, Continuation)> {
        Some((self.success?, self.error?))
    }
}

pub enum HandlerOutput {
    Reply(Reply),
    Persist(Responders),
}

impl From<Reply> for HandlerOutput {
    fn from(reply: Reply) -> Self {
        HandlerOutput::Reply(reply)
    }
}

impl From<Responders> for HandlerOutput {
    fn from(responders: Responders) -> Self {
        HandlerOutput::Persist(responders)
    }
}

/// What a handler sees: the request and the controller's outcome.
pub struct HandlerContext<'a> {
    pub request: &'a ResourceRequest,
    pub outcome: &'a Outcome,
}

impl<'a> HandlerContext<'a> {
    pub fn action(&self) -> &Action {
        &self.request.action
    }

    pub fn params(&self) -> &serde_json::Map<String, Value> {
        &self.request.params
    }

    /// The single record, if the controller produced one.
    pub fn model(&self) -> Option<&dyn Record> {
        match self.outcome {
            Outcome::Record(r) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// The record list, empty unless the controller produced a collection.
    pub fn records(&self) -> &[Box<dyn Record>] {
        match self.outcome {
            Outcome::Collection(rs) => rs,
            _ => &[],
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self.outcome {
            Outcome::Data(v) => Some(v),
            _ => None,
        }
    }

    /// Serialized view of whatever the controller produced.
    pub fn to_json(&self) -> Value {
        match self.outcome {
            Outcome::Record(r) => r.to_json(),
            Outcome::Collection(rs) => Value::Array(rs.iter().map(|r| r.to_json()).collect()),
            Outcome::Data(v) => v.clone(),
            Outcome::Missing | Outcome::Halt(_) => Value::Null,
        }
    }
}

#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError>;
}
