use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use crate::models::Todo;
use crate::routes::find_member;

pub struct TodosShowController(pub MemoryStore<Todo>);

#[async_trait]
impl Controller for TodosShowController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        find_member(&self.0, request)
    }
}
