use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use crate::models::Post;

pub struct PostsIndexController(pub MemoryStore<Post>);

#[async_trait]
impl Controller for PostsIndexController {
    async fn execute(&self, _request: &ResourceRequest) -> Result<Outcome, AppError> {
        Ok(Outcome::collection(self.0.all()?))
    }
}
