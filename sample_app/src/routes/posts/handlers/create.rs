use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

use crate::routes::validation_failed;

pub struct PostsCreateHandler;

#[async_trait]
impl Handler for PostsCreateHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|post| Reply::created(json!({ "message": "Post created", "post": post.to_json() })))
            .error(validation_failed)
            .into())
    }
}
