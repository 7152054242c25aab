use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use super::FIELDS;
use crate::models::Post;
use crate::routes::assign;

pub struct PostsCreateController(pub MemoryStore<Post>);

#[async_trait]
impl Controller for PostsCreateController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let mut post = self.0.build(Post::default());
        assign(&mut post, request, FIELDS)?;
        Ok(Outcome::record(post))
    }
}
