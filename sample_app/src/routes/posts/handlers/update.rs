use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

use crate::routes::validation_failed;

pub struct PostsUpdateHandler;

#[async_trait]
impl Handler for PostsUpdateHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|post| Reply::ok(json!({ "message": "Post updated", "post": post.to_json() })))
            .error(validation_failed)
            .into())
    }
}
