mod complete;
mod create;
mod delete;
mod index;
mod show;
mod update;

pub use complete::TodosCompleteHandler;
pub use create::TodosCreateHandler;
pub use delete::TodosDeleteHandler;
pub use index::TodosIndexHandler;
pub use show::TodosShowHandler;
pub use update::TodosUpdateHandler;
