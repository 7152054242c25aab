//! Resource registry: which resources exist, where their components live on
//! disk, and which children and member actions hang off each of them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One registered resource.
///
/// Nested children are not stored here. They live in the registry, keyed by
/// parent name (see [`ResourceRegistry::children`]), so a child can be
/// declared before or without its parent being registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub name: String,
    pub controllers_dir: PathBuf,
    pub handlers_dir: PathBuf,
}

impl ResourceDescriptor {
    fn new(routes_path: &Path, name: &str) -> Self {
        ResourceDescriptor {
            name: name.to_string(),
            controllers_dir: routes_path.join(name).join("controllers"),
            handlers_dir: routes_path.join(name).join("handlers"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResourceRegistry {
    routes_path: PathBuf,
    resources: Vec<ResourceDescriptor>,
    nested: HashMap<String, Vec<String>>,
    member_actions: HashMap<String, Vec<String>>,
}

impl ResourceRegistry {
    pub fn new(routes_path: impl Into<PathBuf>) -> Self {
        ResourceRegistry {
            routes_path: routes_path.into(),
            resources: Vec::new(),
            nested: HashMap::new(),
            member_actions: HashMap::new(),
        }
    }

    pub fn routes_path(&self) -> &Path {
        &self.routes_path
    }

    /// Adds `name`. Returns `None` when it was already registered.
    pub fn add(&mut self, name: &str) -> Option<&ResourceDescriptor> {
        if self.contains(name) {
            return None;
        }
        self.resources.push(ResourceDescriptor::new(&self.routes_path, name));
        self.resources.last()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.iter().any(|r| r.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Registered resources in registration order.
    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    /// Appends `child` under `parent` unless already present. The parent
    /// need not be registered yet.
    pub fn add_nested(&mut self, parent: &str, child: &str) -> bool {
        push_unique(self.nested.entry(parent.to_string()).or_default(), child)
    }

    pub fn children(&self, parent: &str) -> &[String] {
        self.nested.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_child(&self, parent: &str, child: &str) -> bool {
        self.children(parent).iter().any(|c| c == child)
    }

    pub fn add_member_action(&mut self, resource: &str, action: &str) -> bool {
        push_unique(self.member_actions.entry(resource.to_string()).or_default(), action)
    }

    pub fn member_actions(&self, resource: &str) -> &[String] {
        self.member_actions.get(resource).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_member_action(&self, resource: &str, action: &str) -> bool {
        self.member_actions(resource).iter().any(|a| a == action)
    }
}

fn push_unique(list: &mut Vec<String>, item: &str) -> bool {
    if list.iter().any(|existing| existing == item) {
        return false;
    }
    list.push(item.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent_and_keeps_order() {
        let mut registry = ResourceRegistry::new("routes");
        assert!(registry.add("todos").is_some());
        assert!(registry.add("posts").is_some());
        assert!(registry.add("todos").is_none());
        let names: Vec<_> = registry.resources().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["todos", "posts"]);
    }

    #[test]
    fn descriptor_points_at_conventional_dirs() {
        let mut registry = ResourceRegistry::new("app/routes");
        let descriptor = registry.add("posts").unwrap().clone();
        assert_eq!(descriptor.controllers_dir, PathBuf::from("app/routes/posts/controllers"));
        assert_eq!(descriptor.handlers_dir, PathBuf::from("app/routes/posts/handlers"));
    }

    #[test]
    fn nested_children_are_deduplicated() {
        let mut registry = ResourceRegistry::new("routes");
        assert!(registry.add_nested("posts", "comments"));
        assert!(!registry.add_nested("posts", "comments"));
        assert!(registry.add_nested("posts", "tags"));
        assert_eq!(registry.children("posts"), ["comments", "tags"]);
        assert!(registry.is_child("posts", "tags"));
        assert!(!registry.is_child("todos", "comments"));
        assert!(registry.children("todos").is_empty());
    }

    #[test]
    fn children_declared_before_the_parent_survive_its_registration() {
        let mut registry = ResourceRegistry::new("routes");
        assert!(registry.add_nested("posts", "comments"));
        assert!(registry.add("posts").is_some());
        assert_eq!(registry.children("posts"), ["comments"]);
        assert!(registry.is_child("posts", "comments"));
    }

    #[test]
    fn member_actions_are_deduplicated() {
        let mut registry = ResourceRegistry::new("routes");
        assert!(registry.add_member_action("projects", "archive"));
        assert!(!registry.add_member_action("projects", "archive"));
        assert!(registry.has_member_action("projects", "archive"));
        assert!(!registry.has_member_action("tasks", "archive"));
    }
}
