use async_trait::async_trait;
use axum::http::StatusCode;
use mk_framework::{AppError, Controller, Outcome, Record, Reply, ResourceRequest};
use serde_json::{json, Value};

use crate::Stores;

/// A post together with its comments.
pub struct PostsShowController(pub Stores);

#[async_trait]
impl Controller for PostsShowController {
    async fn execute(&self, request: &ResourceRequest) -> Result<Outcome, AppError> {
        let Some(post) = request.id().map(|id| self.0.posts.find(id)).transpose()?.flatten() else {
            return Ok(Outcome::halt(Reply::new(
                StatusCode::NOT_FOUND,
                json!({ "error": "Post not found" }),
            )));
        };
        let post_id = post.id().unwrap_or_default();
        let comments: Vec<Value> = self
            .0
            .comments
            .filter(|c| c.post_id == post_id)?
            .iter()
            .map(Record::to_json)
            .collect();
        Ok(Outcome::Data(json!({ "post": post.to_json(), "comments": comments })))
    }
}
