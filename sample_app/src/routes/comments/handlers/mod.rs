mod create;
mod delete;
mod index;

pub use create::CommentsCreateHandler;
pub use delete::CommentsDeleteHandler;
pub use index::CommentsIndexHandler;
