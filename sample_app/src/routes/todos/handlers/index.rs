use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply};

pub struct TodosIndexHandler;

#[async_trait]
impl Handler for TodosIndexHandler {
    async fn handle(&self, ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Reply::ok(ctx.to_json()).into())
    }
}
