use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply};

pub struct CommentsIndexHandler;

#[async_trait]
impl Handler for CommentsIndexHandler {
    async fn handle(&self, ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Reply::ok(ctx.to_json()).into())
    }
}
