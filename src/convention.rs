//! Naming conventions: resource + action -> controller/handler names, and the
//! naive singular form used for messages and nested parameter keys.

use std::fmt;

/// An action a route resolves to. `Custom` carries an app-specific member
/// action such as `archive`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Index,
    Show,
    Create,
    Update,
    Delete,
    Custom(String),
}

impl Action {
    /// Capitalized form used in component names, e.g. "Index", "Archive".
    pub fn name(&self) -> String {
        match self {
            Action::Index => "Index".into(),
            Action::Show => "Show".into(),
            Action::Create => "Create".into(),
            Action::Update => "Update".into(),
            Action::Delete => "Delete".into(),
            Action::Custom(a) => capitalize(a),
        }
    }

    /// Index and Show render; every other action persists through the
    /// success/error protocol.
    pub fn is_read(&self) -> bool {
        matches!(self, Action::Index | Action::Show)
    }

    pub fn is_mutation(&self) -> bool {
        !self.is_read()
    }

    /// Maps a component file stem ("index", "archive") to an action.
    pub fn from_stem(stem: &str) -> Action {
        match stem {
            "index" => Action::Index,
            "show" => Action::Show,
            "create" => Action::Create,
            "update" => Action::Update,
            "delete" => Action::Delete,
            other => Action::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// First character uppercased, the rest lowercased ("todos" -> "Todos",
/// "blogPosts" -> "Blogposts").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Strips one trailing `s`. Deliberately naive: "status" -> "statu".
/// Consumers depend on the parameter names this produces, so it must not be
/// replaced with a real singularizer.
pub fn singularize(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

pub fn controller_name(resource: &str, action: &Action) -> String {
    format!("{}{}Controller", capitalize(resource), action.name())
}

pub fn handler_name(resource: &str, action: &Action) -> String {
    format!("{}{}Handler", capitalize(resource), action.name())
}

/// Parameter key carrying the parent id on nested routes, e.g. "post_id".
pub fn nested_param_name(parent: &str) -> String {
    format!("{}_id", singularize(parent))
}

/// Display name of a single resource, e.g. "todos" -> "Todo".
pub fn display_name(resource: &str) -> String {
    singularize(&capitalize(resource)).to_string()
}
