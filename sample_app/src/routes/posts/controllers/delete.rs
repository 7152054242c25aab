use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use crate::models::Post;
use crate::routes::find_member;

pub struct PostsDeleteController(pub MemoryStore<Post>);

#[async_trait]
impl Controller for PostsDeleteController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        find_member(&self.0, request)
    }
}
