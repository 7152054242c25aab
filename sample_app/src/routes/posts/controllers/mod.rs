mod create;
mod delete;
mod index;
mod show;
mod update;

pub use create::PostsCreateController;
pub use delete::PostsDeleteController;
pub use index::PostsIndexController;
pub use show::PostsShowController;
pub use update::PostsUpdateController;

const FIELDS: &[&str] = &["title", "description"];
