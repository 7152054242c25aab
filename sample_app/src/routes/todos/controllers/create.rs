use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use super::FIELDS;
use crate::models::Todo;
use crate::routes::assign;

pub struct TodosCreateController(pub MemoryStore<Todo>);

#[async_trait]
impl Controller for TodosCreateController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let mut todo = self.0.build(Todo::default());
        assign(&mut todo, request, FIELDS)?;
        Ok(Outcome::record(todo))
    }
}
