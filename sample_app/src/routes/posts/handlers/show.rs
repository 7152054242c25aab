use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply};
use serde_json::json;

pub struct PostsShowHandler;

#[async_trait]
impl Handler for PostsShowHandler {
    async fn handle(&self, ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        let Some(data) = ctx.data() else {
            return Err(AppError::HandlerContract("post show expects composed data".into()));
        };
        let mut post = data["post"].clone();
        post["comments"] = data.get("comments").cloned().unwrap_or_else(|| json!([]));
        Ok(Reply::ok(post).into())
    }
}
