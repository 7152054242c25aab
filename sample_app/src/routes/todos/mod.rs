pub mod controllers;
pub mod handlers;

use mk_framework::ApplicationBuilder;

use self::controllers::*;
use self::handlers::*;
use crate::routes::with_store;
use crate::Stores;

pub fn register(builder: &mut ApplicationBuilder, stores: &Stores) {
    let todos = &stores.todos;
    builder
        .controller("TodosIndexController", with_store(todos, TodosIndexController))
        .controller("TodosShowController", with_store(todos, TodosShowController))
        .controller("TodosCreateController", with_store(todos, TodosCreateController))
        .controller("TodosUpdateController", with_store(todos, TodosUpdateController))
        .controller("TodosDeleteController", with_store(todos, TodosDeleteController))
        .controller("TodosCompleteController", with_store(todos, TodosCompleteController))
        .handler("TodosIndexHandler", || TodosIndexHandler)
        .handler("TodosShowHandler", || TodosShowHandler)
        .handler("TodosCreateHandler", || TodosCreateHandler)
        .handler("TodosUpdateHandler", || TodosUpdateHandler)
        .handler("TodosDeleteHandler", || TodosDeleteHandler)
        .handler("TodosCompleteHandler", || TodosCompleteHandler);
}
