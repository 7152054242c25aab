use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use crate::models::Todo;

/// `POST /todos/:id/complete`
pub struct TodosCompleteController(pub MemoryStore<Todo>);

#[async_trait]
impl Controller for TodosCompleteController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let Some(mut todo) = request.id().map(|id| self.0.find(id)).transpose()?.flatten() else {
            return Ok(Outcome::Missing);
        };
        todo.attrs_mut().completed = true;
        Ok(Outcome::record(todo))
    }
}
