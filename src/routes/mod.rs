//! HTTP routes and the route table.

mod common;
mod resource;
pub mod table;

pub use common::{not_found, welcome};
pub use resource::resource_routes;
pub use table::{ResourceRoute, RouteMatch, RouteRule, RouteTable, Shape};
