use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply};

pub struct TodosShowHandler;

#[async_trait]
impl Handler for TodosShowHandler {
    async fn handle(&self, ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        let todo = ctx
            .model()
            .ok_or_else(|| AppError::HandlerContract("todo show expects a single record".into()))?;
        Ok(Reply::ok(todo.to_json()).into())
    }
}
