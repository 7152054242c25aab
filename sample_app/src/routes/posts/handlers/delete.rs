use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

pub struct PostsDeleteHandler;

#[async_trait]
impl Handler for PostsDeleteHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|post| Reply::ok(json!({ "message": "Post deleted successfully", "post": post.to_json() })))
            .error(|_| Reply::server_error("Failed to delete post"))
            .into())
    }
}
