mod create;
mod delete;
mod index;

pub use create::CommentsCreateController;
pub use delete::CommentsDeleteController;
pub use index::CommentsIndexController;

use axum::http::StatusCode;
use mk_framework::{AppError, Outcome, Reply, ResourceRequest};
use serde_json::json;

use crate::Stores;

/// The parent post id from a nested route, or the reply to halt with.
fn parent_post(stores: &Stores, request: &ResourceRequest) -> Result<Result<u64, Outcome>, AppError> {
    let Some(post_id) = request.param_u64("post_id") else {
        return Ok(Err(Outcome::Missing));
    };
    if stores.posts.find(post_id)?.is_none() {
        return Ok(Err(Outcome::halt(Reply::new(
            StatusCode::NOT_FOUND,
            json!({ "error": "Post not found" }),
        ))));
    }
    Ok(Ok(post_id))
}
