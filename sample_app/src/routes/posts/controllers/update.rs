use async_trait::async_trait;
use mk_framework::{AppError, Controller, MemoryStore, Outcome, ResourceRequest};

use super::FIELDS;
use crate::models::Post;
use crate::routes::assign;

pub struct PostsUpdateController(pub MemoryStore<Post>);

#[async_trait]
impl Controller for PostsUpdateController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let Some(mut post) = request.id().map(|id| self.0.find(id)).transpose()?.flatten() else {
            return Ok(Outcome::Missing);
        };
        assign(&mut post, request, FIELDS)?;
        Ok(Outcome::record(post))
    }
}
