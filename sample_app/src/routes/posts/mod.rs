pub mod controllers;
pub mod handlers;

use mk_framework::ApplicationBuilder;

use self::controllers::*;
use self::handlers::*;
use crate::routes::with_store;
use crate::Stores;

pub fn register(builder: &mut ApplicationBuilder, stores: &Stores) {
    builder
        .controller("PostsIndexController", with_store(&stores.posts, PostsIndexController))
        .controller("PostsShowController", with_store(stores, PostsShowController))
        .controller("PostsCreateController", with_store(&stores.posts, PostsCreateController))
        .controller("PostsUpdateController", with_store(&stores.posts, PostsUpdateController))
        .controller("PostsDeleteController", with_store(&stores.posts, PostsDeleteController))
        .handler("PostsIndexHandler", || PostsIndexHandler)
        .handler("PostsShowHandler", || PostsShowHandler)
        .handler("PostsCreateHandler", || PostsCreateHandler)
        .handler("PostsUpdateHandler", || PostsUpdateHandler)
        .handler("PostsDeleteHandler", || PostsDeleteHandler);
}
