use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use super::FIELDS;
use crate::models::Todo;
use crate::routes::assign;

pub struct TodosUpdateController(pub MemoryStore<Todo>);

#[async_trait]
impl Controller for TodosUpdateController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let Some(mut todo) = request.id().map(|id| self.0.find(id)).transpose()?.flatten() else {
            return Ok(Outcome::Missing);
        };
        assign(&mut todo, request, FIELDS)?;
        Ok(Outcome::record(todo))
    }
}
