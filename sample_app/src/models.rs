//! Domain models.

use mk_framework::{validate_model, Model, ValidationErrors, ValidationRule};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Todo {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Model for Todo {
    fn validate(&self, errors: &mut ValidationErrors) {
        validate_model(self, &[("title", ValidationRule::required().max_length(100))], errors);
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Post {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Model for Post {
    fn validate(&self, errors: &mut ValidationErrors) {
        validate_model(self, &[("title", ValidationRule::required().max_length(100))], errors);
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Comment {
    pub post_id: u64,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl Model for Comment {
    fn validate(&self, errors: &mut ValidationErrors) {
        validate_model(
            self,
            &[
                ("content", ValidationRule::required().max_length(1000)),
                ("author", ValidationRule::default().max_length(100)),
            ],
            errors,
        );
    }
}

impl Todo {
    pub fn new(title: &str, description: &str, completed: bool) -> Self {
        Todo {
            title: Some(title.into()),
            description: Some(description.into()),
            completed,
        }
    }
}

impl Post {
    pub fn new(title: &str, description: &str) -> Self {
        Post {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }
}
