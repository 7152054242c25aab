use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

use crate::routes::validation_failed;

pub struct TodosCreateHandler;

#[async_trait]
impl Handler for TodosCreateHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|todo| Reply::created(json!({ "message": "Todo created", "todo": todo.to_json() })))
            .error(validation_failed)
            .into())
    }
}
