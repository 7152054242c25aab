use async_trait::async_trait;
use mk_framework::{AppError, Controller, Outcome, ResourceRequest};

use super::parent_post;
use crate::models::Comment;
use crate::routes::assign;
use crate::Stores;

/// `POST /posts/:id/comments`
pub struct CommentsCreateController(pub Stores);

#[async_trait]
impl Controller for CommentsCreateController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let post_id = match parent_post(&self.0, request)? {
            Ok(id) => id,
            Err(stop) => return Ok(stop),
        };
        let mut comment = self.0.comments.build(Comment {
            post_id,
            ..Comment::default()
        });
        assign(&mut comment, request, &["content", "author"])?;
        Ok(Outcome::record(comment))
    }
}
