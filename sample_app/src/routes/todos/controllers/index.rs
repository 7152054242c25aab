use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use crate::models::Todo;

pub struct TodosIndexController(pub MemoryStore<Todo>);

#[async_trait]
impl Controller for TodosIndexController {
    async fn execute(&self, _request: &ResourceRequest) -> Result<Outcome, AppError> {
        Ok(Outcome::collection(self.0.all()?))
    }
}
