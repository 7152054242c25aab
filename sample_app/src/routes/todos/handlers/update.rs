use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

use crate::routes::validation_failed;

pub struct TodosUpdateHandler;

#[async_trait]
impl Handler for TodosUpdateHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|todo| Reply::ok(json!({ "message": "Todo updated", "todo": todo.to_json() })))
            .error(validation_failed)
            .into())
    }
}
