mod create;
mod delete;
mod index;
mod show;
mod update;

pub use create::PostsCreateHandler;
pub use delete::PostsDeleteHandler;
pub use index::PostsIndexHandler;
pub use show::PostsShowHandler;
pub use update::PostsUpdateHandler;
