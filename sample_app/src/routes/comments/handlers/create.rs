use async_trait::async_trait;
use mk_framework::{AppError, Handler, HandlerContext, HandlerOutput, Reply, Responders};
use serde_json::json;

use crate::routes::validation_failed;

pub struct CommentsCreateHandler;

#[async_trait]
impl Handler for CommentsCreateHandler {
    async fn handle(&self, _ctx: HandlerContext<'_>) -> Result<HandlerOutput, AppError> {
        Ok(Responders::new()
            .success(|comment| Reply::created(json!({ "message": "Comment created", "comment": comment.to_json() })))
            .error(validation_failed)
            .into())
    }
}
