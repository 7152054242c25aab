//! Application assembly: register resources and components at startup, then
//! freeze everything into an [`Application`] that serves requests.

use axum::http::{Method, StatusCode};
use axum::Router;
use serde_json::{Map, Value};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, info, warn};

use crate::boundary;
use crate::component::ComponentRegistry;
use crate::config::{component_stems, discover_resources, validate_resource_name, FrameworkConfig};
use crate::controller::Controller;
use crate::convention::{controller_name, handler_name, Action};
use crate::error::ConfigError;
use crate::handler::Handler;
use crate::registry::ResourceRegistry;
use crate::request::ResourceRequest;
use crate::response::{not_found_body, Reply};
use crate::routes::{self, ResourceRoute, RouteMatch, RouteTable};
use crate::service::pipeline;
use crate::state::AppState;

/// Mutable startup phase. Nothing here is shared with request handling.
pub struct ApplicationBuilder {
    config: FrameworkConfig,
    resources: ResourceRegistry,
    routes: RouteTable,
    components: ComponentRegistry,
}

impl ApplicationBuilder {
    pub fn new(config: FrameworkConfig) -> Self {
        ApplicationBuilder {
            resources: ResourceRegistry::new(config.routes_path.clone()),
            routes: RouteTable::new(),
            components: ComponentRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    /// Registers a controller factory under its convention name, e.g.
    /// `TodosIndexController`.
    pub fn controller<C, F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        C: Controller + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.components.register_controller(name, factory);
        self
    }

    pub fn handler<H, F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        H: Handler + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        self.components.register_handler(name, factory);
        self
    }

    /// Adds `name` and appends its route rules. Returns `false` when the
    /// resource was already registered; the first registration stands.
    pub fn register_resource(&mut self, name: &str) -> Result<bool, ConfigError> {
        validate_resource_name(name)?;
        let Some(descriptor) = self.resources.add(name).cloned() else {
            debug!(resource = name, "resource already registered");
            return Ok(false);
        };

        let mut actions = component_stems(&descriptor.controllers_dir)?;
        actions.extend(component_stems(&descriptor.handlers_dir)?);
        actions.sort();
        actions.dedup();
        for stem in &actions {
            let action = Action::from_stem(stem);
            let controller = controller_name(name, &action);
            let handler = handler_name(name, &action);
            if !self.components.has_controller(&controller) {
                warn!(resource = name, component = %controller, "controller file found but not registered");
            }
            if !self.components.has_handler(&handler) {
                warn!(resource = name, component = %handler, "handler file found but not registered");
            }
        }

        self.routes.extend(name);
        info!(resource = name, actions = actions.len(), "registered resource");
        Ok(true)
    }

    /// Routes `/<parent>/:id/<child>` to the child's index/create components.
    pub fn register_nested_resource(&mut self, parent: &str, child: &str) -> Result<bool, ConfigError> {
        validate_resource_name(parent)?;
        validate_resource_name(child)?;
        let added = self.resources.add_nested(parent, child);
        if added {
            debug!(parent, child, "registered nested resource");
        }
        Ok(added)
    }

    /// Routes `POST /<resource>/:id/<action>` to `<Resource><Action>` components.
    pub fn register_member_action(&mut self, resource: &str, action: &str) -> Result<bool, ConfigError> {
        validate_resource_name(resource)?;
        validate_resource_name(action)?;
        let added = self.resources.add_member_action(resource, action);
        if added {
            debug!(resource, action, "registered member action");
        }
        Ok(added)
    }

    /// Registers every immediate subdirectory of the routes directory, in
    /// name order. Returns how many were newly added.
    pub fn load_routes(&mut self) -> Result<usize, ConfigError> {
        let mut added = 0;
        for name in discover_resources(&self.config.routes_path)? {
            if self.register_resource(&name)? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn build(self) -> Application {
        info!(
            resources = self.resources.resources().len(),
            rules = self.routes.rules().len(),
            components = self.components.len(),
            "application built"
        );
        Application {
            config: self.config,
            resources: self.resources,
            routes: self.routes,
            components: self.components,
        }
    }
}

/// Frozen application context, shared read-only by every request.
pub struct Application {
    config: FrameworkConfig,
    resources: ResourceRegistry,
    routes: RouteTable,
    components: ComponentRegistry,
}

impl Application {
    pub fn builder(config: FrameworkConfig) -> ApplicationBuilder {
        ApplicationBuilder::new(config)
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn resolve(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        self.routes.resolve(method, path, &self.resources)
    }

    /// Resolves and runs one request. Always produces a reply: unmatched
    /// routes become 404s and pipeline failures go through the error boundary.
    pub async fn dispatch(&self, method: Method, path: &str, params: Map<String, Value>) -> Reply {
        match self.resolve(&method, path) {
            Some(RouteMatch::Resource(route)) => self.run(method, path, route, params).await,
            Some(RouteMatch::Root) => routes::welcome(),
            None => unmatched(&method, path),
        }
    }

    /// Runs the pipeline for an already resolved route.
    pub async fn run(&self, method: Method, path: &str, route: ResourceRoute, mut params: Map<String, Value>) -> Reply {
        for (key, value) in route.path_params {
            params.insert(key, Value::String(value));
        }
        let request = ResourceRequest {
            method,
            path: path.to_string(),
            resource: route.resource,
            action: route.action,
            params,
        };
        debug!(resource = %request.resource, action = %request.action, "dispatching");

        match pipeline::run(&self.components, &request).await {
            Ok(reply) => reply,
            Err(failure) => boundary::render(self.config.environment, &request, &failure),
        }
    }

    /// The axum router serving this application.
    pub fn router(self) -> Router {
        let limit = self.config.max_body_bytes;
        routes::resource_routes(AppState::new(self)).layer(RequestBodyLimitLayer::new(limit))
    }
}

/// 404 for a method and path no route rule matches.
pub(crate) fn unmatched(method: &Method, path: &str) -> Reply {
    debug!(%method, path, "no route matched");
    Reply::new(StatusCode::NOT_FOUND, not_found_body(path))
}
