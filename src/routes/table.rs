//! Ordered route rules built once at startup and matched first-wins.
//!
//! Each registered resource appends its rules after everything registered
//! before it, so earlier resources stay reachable. Nested children and member
//! actions are looked up in the registry at match time, which is why a child
//! registered after its parent still routes.

use axum::http::Method;

use crate::convention::{nested_param_name, Action};
use crate::registry::ResourceRegistry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `/`
    Root,
    /// `/<resource>`
    Collection,
    /// `/<resource>/:id/<child>` for a registered child
    Nested,
    /// `/<resource>/:id`
    Member,
    /// `/<resource>/:id/delete`
    Delete,
    /// `/<resource>/:id/<action>` for a registered member action
    MemberAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub resource: String,
    pub method: Method,
    pub shape: Shape,
    /// `None` where the action comes from the path (member actions) or the
    /// rule is the root.
    pub action: Option<Action>,
}

/// A resolved resource route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRoute {
    /// Resource whose components run; the child on nested routes.
    pub resource: String,
    pub action: Action,
    pub path_params: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    Root,
    Resource(ResourceRoute),
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// A table answering only `GET /`.
    pub fn new() -> Self {
        RouteTable {
            rules: vec![RouteRule {
                resource: String::new(),
                method: Method::GET,
                shape: Shape::Root,
                action: None,
            }],
        }
    }

    /// Appends the rules for `resource` after all existing ones.
    pub fn extend(&mut self, resource: &str) {
        let rule = |method: Method, shape: Shape, action: Option<Action>| RouteRule {
            resource: resource.to_string(),
            method,
            shape,
            action,
        };
        self.rules.extend([
            rule(Method::GET, Shape::Collection, Some(Action::Index)),
            rule(Method::POST, Shape::Collection, Some(Action::Create)),
            rule(Method::GET, Shape::Nested, Some(Action::Index)),
            rule(Method::POST, Shape::Nested, Some(Action::Create)),
            rule(Method::GET, Shape::Member, Some(Action::Show)),
            rule(Method::POST, Shape::Member, Some(Action::Update)),
            rule(Method::POST, Shape::Delete, Some(Action::Delete)),
            rule(Method::POST, Shape::MemberAction, None),
        ]);
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn resolve(&self, method: &Method, path: &str, registry: &ResourceRegistry) -> Option<RouteMatch> {
        let segments = split_path(path)?;
        self.rules
            .iter()
            .find_map(|rule| rule.matches(method, &segments, registry))
    }
}

impl RouteRule {
    fn matches(&self, method: &Method, segments: &[&str], registry: &ResourceRegistry) -> Option<RouteMatch> {
        if *method != self.method {
            return None;
        }
        if self.shape == Shape::Root {
            return segments.is_empty().then_some(RouteMatch::Root);
        }
        let (first, rest) = segments.split_first()?;
        if *first != self.resource {
            return None;
        }
        let resource_route = |resource: &str, action: Action, path_params: Vec<(String, String)>| {
            Some(RouteMatch::Resource(ResourceRoute {
                resource: resource.to_string(),
                action,
                path_params,
            }))
        };
        match (&self.shape, rest) {
            (Shape::Collection, []) => resource_route(&self.resource, self.action.clone()?, Vec::new()),
            (Shape::Member, [id]) => {
                resource_route(&self.resource, self.action.clone()?, vec![("id".into(), id.to_string())])
            }
            (Shape::Nested, [id, child]) if registry.is_child(&self.resource, child) => resource_route(
                child,
                self.action.clone()?,
                vec![
                    ("id".into(), id.to_string()),
                    (nested_param_name(&self.resource), id.to_string()),
                ],
            ),
            (Shape::Delete, [id, "delete"]) => {
                resource_route(&self.resource, self.action.clone()?, vec![("id".into(), id.to_string())])
            }
            (Shape::MemberAction, [id, action]) if registry.has_member_action(&self.resource, action) => {
                resource_route(
                    &self.resource,
                    Action::Custom(action.to_string()),
                    vec![("id".into(), id.to_string())],
                )
            }
            _ => None,
        }
    }
}

/// Splits `/a/b` into `["a", "b"]`. `None` when a segment is empty, so
/// `/todos/` and `//todos` never match.
fn split_path(path: &str) -> Option<Vec<&str>> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(resources: &[&str]) -> (RouteTable, ResourceRegistry) {
        let mut table = RouteTable::new();
        let mut registry = ResourceRegistry::new("routes");
        for r in resources {
            registry.add(r);
            table.extend(r);
        }
        (table, registry)
    }

    fn resolved(table: &RouteTable, registry: &ResourceRegistry, method: Method, path: &str) -> Option<ResourceRoute> {
        match table.resolve(&method, path, registry)? {
            RouteMatch::Resource(route) => Some(route),
            RouteMatch::Root => None,
        }
    }

    #[test]
    fn root_only_answers_get_slash() {
        let (table, registry) = setup(&[]);
        assert_eq!(table.resolve(&Method::GET, "/", &registry), Some(RouteMatch::Root));
        assert_eq!(table.resolve(&Method::POST, "/", &registry), None);
        assert_eq!(table.resolve(&Method::GET, "/todos", &registry), None);
    }

    #[test]
    fn crud_shapes_map_to_actions() {
        let (table, registry) = setup(&["todos"]);
        let cases = [
            (Method::GET, "/todos", Action::Index),
            (Method::POST, "/todos", Action::Create),
            (Method::GET, "/todos/4", Action::Show),
            (Method::POST, "/todos/4", Action::Update),
            (Method::POST, "/todos/4/delete", Action::Delete),
        ];
        for (method, path, action) in cases {
            let route = resolved(&table, &registry, method, path).unwrap();
            assert_eq!(route.resource, "todos");
            assert_eq!(route.action, action, "{}", path);
        }
        let show = resolved(&table, &registry, Method::GET, "/todos/4").unwrap();
        assert_eq!(show.path_params, vec![("id".to_string(), "4".to_string())]);
    }

    #[test]
    fn unmatched_shapes_and_methods_resolve_to_none() {
        let (table, registry) = setup(&["todos"]);
        assert!(table.resolve(&Method::GET, "/todos/4/delete", &registry).is_none());
        assert!(table.resolve(&Method::PUT, "/todos/4", &registry).is_none());
        assert!(table.resolve(&Method::GET, "/todos/", &registry).is_none());
        assert!(table.resolve(&Method::GET, "/todos/4/comments", &registry).is_none());
        assert!(table.resolve(&Method::GET, "/todos/4/x/y", &registry).is_none());
    }

    #[test]
    fn every_registered_resource_stays_reachable() {
        let (table, registry) = setup(&["alphas", "betas", "gammas"]);
        for name in ["alphas", "betas", "gammas"] {
            let route = resolved(&table, &registry, Method::GET, &format!("/{}", name)).unwrap();
            assert_eq!(route.resource, name);
            let route = resolved(&table, &registry, Method::POST, &format!("/{}/1/delete", name)).unwrap();
            assert_eq!(route.action, Action::Delete);
        }
        assert_eq!(table.rules().len(), 1 + 3 * 8);
    }

    #[test]
    fn nested_routes_inject_parent_id_and_dispatch_child() {
        let (table, mut registry) = setup(&["posts"]);
        // registered after the parent's rules were built
        registry.add_nested("posts", "comments");
        let index = resolved(&table, &registry, Method::GET, "/posts/12/comments").unwrap();
        assert_eq!(index.resource, "comments");
        assert_eq!(index.action, Action::Index);
        assert!(index.path_params.contains(&("post_id".to_string(), "12".to_string())));
        assert!(index.path_params.contains(&("id".to_string(), "12".to_string())));
        let create = resolved(&table, &registry, Method::POST, "/posts/12/comments").unwrap();
        assert_eq!(create.action, Action::Create);
    }

    #[test]
    fn nested_routes_only_exist_under_their_parent() {
        let (table, mut registry) = setup(&["posts", "todos"]);
        registry.add_nested("posts", "comments");
        assert!(table.resolve(&Method::GET, "/todos/1/comments", &registry).is_none());
    }

    #[test]
    fn nested_param_uses_naive_singular() {
        let (table, mut registry) = setup(&["status"]);
        registry.add_nested("status", "notes");
        let route = resolved(&table, &registry, Method::GET, "/status/3/notes").unwrap();
        assert!(route.path_params.contains(&("statu_id".to_string(), "3".to_string())));
    }

    #[test]
    fn child_named_delete_wins_over_delete_route() {
        let (table, mut registry) = setup(&["posts"]);
        registry.add_nested("posts", "delete");
        let route = resolved(&table, &registry, Method::POST, "/posts/1/delete").unwrap();
        assert_eq!(route.resource, "delete");
        assert_eq!(route.action, Action::Create);
    }

    #[test]
    fn member_actions_route_as_custom() {
        let (table, mut registry) = setup(&["projects"]);
        registry.add_member_action("projects", "archive");
        let route = resolved(&table, &registry, Method::POST, "/projects/2/archive").unwrap();
        assert_eq!(route.action, Action::Custom("archive".into()));
        assert!(table.resolve(&Method::GET, "/projects/2/archive", &registry).is_none());
        assert!(table.resolve(&Method::POST, "/projects/2/restore", &registry).is_none());
    }
}
