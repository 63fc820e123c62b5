//! Location cascade: province > district > municipality.
//!
//! - model.rs: API functions for the three scoped list endpoints
//! - resolver.rs: per-address option caches with stale-response fencing

pub mod model;
pub mod resolver;

pub use resolver::LocationResolver;
