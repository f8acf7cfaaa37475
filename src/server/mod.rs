//! Server module for assembling the HTTP application
//!
//! `ServerBuilder` collects resource descriptors, merges their routes with
//! the health endpoints and installs the 404/405 fallbacks.

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use router::{build_rest_router, method_not_allowed, route_not_found};
