//! Comments live under posts (`/posts/:id/comments`); top-level routes only
//! allow deleting one.

pub mod controllers;
pub mod handlers;

use mk_framework::ApplicationBuilder;

use self::controllers::*;
use self::handlers::*;
use crate::routes::with_store;
use crate::Stores;

pub fn register(builder: &mut ApplicationBuilder, stores: &Stores) {
    builder
        .controller("CommentsIndexController", with_store(stores, CommentsIndexController))
        .controller("CommentsCreateController", with_store(stores, CommentsCreateController))
        .controller("CommentsDeleteController", with_store(&stores.comments, CommentsDeleteController))
        .handler("CommentsIndexHandler", || CommentsIndexHandler)
        .handler("CommentsCreateHandler", || CommentsCreateHandler)
        .handler("CommentsDeleteHandler", || CommentsDeleteHandler);
}
