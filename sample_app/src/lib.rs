//! Sample application on mk-framework: todos with a `complete` member action,
//! and posts with comments nested under them.

pub mod models;
pub mod routes;

use mk_framework::{Application, ConfigError, FrameworkConfig, MemoryStore};

use crate::models::{Comment, Post, Todo};

/// Component directories shipped with the crate, laid out by convention.
pub const ROUTES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/routes");

/// Every resource this app serves, in registration order.
pub const RESOURCES: &[&str] = &["todos", "posts", "comments"];

#[derive(Clone, Default)]
pub struct Stores {
    pub todos: MemoryStore<Todo>,
    pub posts: MemoryStore<Post>,
    pub comments: MemoryStore<Comment>,
}

/// Registers components, nesting and member actions, then the resources.
/// Directories under the routes path are picked up first; the built-in list
/// covers deployments that ship without the source tree.
pub fn build_app(config: FrameworkConfig, stores: &Stores) -> Result<Application, ConfigError> {
    let mut builder = Application::builder(config);
    routes::todos::register(&mut builder, stores);
    routes::posts::register(&mut builder, stores);
    routes::comments::register(&mut builder, stores);

    builder.register_nested_resource("posts", "comments")?;
    builder.register_member_action("todos", "complete")?;

    let discovered = builder.load_routes()?;
    tracing::debug!(discovered, "loaded routes directory");
    for name in RESOURCES {
        builder.register_resource(name)?;
    }
    Ok(builder.build())
}
