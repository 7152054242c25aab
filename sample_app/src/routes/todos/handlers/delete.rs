use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

pub struct TodosDeleteHandler;

#[async_trait]
impl Handler for TodosDeleteHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|todo| Reply::ok(json!({ "message": "Todo deleted successfully", "todo": todo.to_json() })))
            .error(|_| Reply::server_error("Failed to delete todo"))
            .into())
    }
}
