//! Request extractors.

mod params;

pub use params::RequestParams;
