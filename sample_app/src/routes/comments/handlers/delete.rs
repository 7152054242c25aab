use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

pub struct CommentsDeleteHandler;

#[async_trait]
impl Handler for CommentsDeleteHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|comment| {
                Reply::ok(json!({ "message": "Comment deleted successfully", "comment": comment.to_json() }))
            })
            .error(|_| Reply::server_error("Failed to delete comment"))
            .into())
    }
}
