//! Request pipeline and field validation helpers.

pub mod pipeline;
mod validation;

pub use validation::{validate_fields, validate_model, ValidationRule};
