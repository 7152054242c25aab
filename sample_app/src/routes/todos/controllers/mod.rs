mod complete;
mod create;
mod delete;
mod index;
mod show;
mod update;

pub use complete::TodosCompleteController;
pub use create::TodosCreateController;
pub use delete::TodosDeleteController;
pub use index::TodosIndexController;
pub use show::TodosShowController;
pub use update::TodosUpdateController;

/// Fields a request may write.
const FIELDS: &[&str] = &["title", "description", "completed"];
