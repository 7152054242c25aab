//! Name -> factory lookup for controllers and handlers.
//!
//! Components are registered explicitly at startup under their convention
//! names (`TodosIndexController`, `TodosIndexHandler`). The pipeline computes
//! the names for a matched route and asks for fresh instances per request.

use std::collections::HashMap;
use std::sync::Arc;

use crate::controller::Controller;
use crate::handler::Handler;

type ControllerFactory = Arc<dyn Fn() -> Box<dyn Controller> + Send + Sync>;
type HandlerFactory = Arc<dyn Fn() -> Box<dyn Handler> + Send + Sync>;

#[derive(Clone, Default)]
pub struct ComponentRegistry {
    controllers: HashMap<String, ControllerFactory>,
    handlers: HashMap<String, HandlerFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later registrations under the same name replace earlier ones.
    pub fn register_controller<C, F>(&mut self, name: impl Into<String>, factory: F)
    where
        C: Controller + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.controllers
            .insert(name.into(), Arc::new(move || Box::new(factory()) as Box<dyn Controller>));
    }

    pub fn register_handler<H, F>(&mut self, name: impl Into<String>, factory: F)
    where
        H: Handler + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        self.handlers
            .insert(name.into(), Arc::new(move || Box::new(factory()) as Box<dyn Handler>));
    }

    pub fn controller(&self, name: &str) -> Option<Box<dyn Controller>> {
        self.controllers.get(name).map(|f| f())
    }

    pub fn handler(&self, name: &str) -> Option<Box<dyn Handler>> {
        self.handlers.get(name).map(|f| f())
    }

    pub fn has_controller(&self, name: &str) -> bool {
        self.controllers.contains_key(name)
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.controllers.len() + self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
