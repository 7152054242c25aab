use async_trait::async_trait;
use mk_framework::{AppError, Controller, Outcome, ResourceRequest};

use super::parent_post;
use crate::Stores;

/// `GET /posts/:id/comments`
pub struct CommentsIndexController(pub Stores);

#[async_trait]
impl Controller for CommentsIndexController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let post_id = match parent_post(&self.0, request)? {
            Ok(id) => id,
            Err(stop) => return Ok(stop),
        };
        Ok(Outcome::collection(self.0.comments.filter(|c| c.post_id == post_id)?))
    }
}
