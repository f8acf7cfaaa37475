//! Entity registry for collecting resource descriptors and their routes

use axum::Router;
use std::collections::BTreeMap;

/// Describes how a resource mounts its routes
///
/// Each resource (dish, order) implements this trait once; the builder merges
/// the routers of every registered descriptor.
pub trait EntityDescriptor: Send + Sync {
    /// The resource name (singular, e.g. "order")
    fn entity_type(&self) -> &str;

    /// The plural form used as the collection path (e.g. "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this resource, state already attached
    ///
    /// Expected shape:
    /// - `/{plural}` for list and create
    /// - `/{plural}/{id}` for the per-record operations
    fn build_routes(&self) -> Router;
}

/// Registry of every resource served by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, replacing any previous one of the same type
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        if self.descriptors.insert(entity_type.clone(), descriptor).is_some() {
            tracing::warn!(%entity_type, "entity registered twice, keeping the latest");
        }
    }

    /// Merge the routes of every registered resource
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                tracing::debug!(
                    entity = descriptor.entity_type(),
                    path = %format!("/{}", descriptor.plural()),
                    "mounting resource routes"
                );
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered resource names, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    struct MockDescriptor {
        entity_type: String,
        plural: String,
    }

    impl MockDescriptor {
        fn new(entity_type: &str, plural: &str) -> Self {
            Self {
                entity_type: entity_type.to_string(),
                plural: plural.to_string(),
            }
        }
    }

    impl EntityDescriptor for MockDescriptor {
        fn entity_type(&self) -> &str {
            &self.entity_type
        }

        fn plural(&self) -> &str {
            &self.plural
        }

        fn build_routes(&self) -> Router {
            Router::new().route(&format!("/{}", self.plural), get(|| async { "ok" }))
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = EntityRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.entity_types().is_empty());
    }

    #[test]
    fn test_register_multiple_entities_sorted() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(MockDescriptor::new("order", "orders")));
        registry.register(Box::new(MockDescriptor::new("dish", "dishes")));
        assert_eq!(registry.entity_types(), vec!["dish", "order"]);
    }

    #[test]
    fn test_register_duplicate_replaces() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(MockDescriptor::new("order", "orders")));
        registry.register(Box::new(MockDescriptor::new("order", "commandes")));
        assert_eq!(registry.entity_types().len(), 1);
    }

    #[test]
    fn test_build_routes_with_entities() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(MockDescriptor::new("order", "orders")));
        registry.register(Box::new(MockDescriptor::new("dish", "dishes")));
        let _router = registry.build_routes();
    }
}
