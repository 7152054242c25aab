use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use crate::models::Comment;
use crate::routes::find_member;

pub struct CommentsDeleteController(pub MemoryStore<Comment>);

#[async_trait]
impl Controller for CommentsDeleteController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        find_member(&self.0, request)
    }
}
