//! ServerBuilder for assembling the HTTP application

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::router::build_rest_router;
use crate::core::{IdGenerator, UuidIdGenerator};
use crate::entities::{DishDescriptor, OrderDescriptor};
use crate::storage::{InMemoryStore, SeedData};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the GrubDash HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::from_seed(SeedData::default())
///     .serve("127.0.0.1:5000")
///     .await?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with both resources backed by in-memory stores loaded from `seed`
    pub fn from_seed(seed: SeedData) -> Self {
        Self::from_seed_with_ids(seed, Arc::new(UuidIdGenerator))
    }

    /// Same as [`from_seed`](Self::from_seed) with a custom id source
    pub fn from_seed_with_ids(seed: SeedData, ids: Arc<dyn IdGenerator>) -> Self {
        tracing::info!(
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "loading seed data"
        );
        Self::new()
            .register(DishDescriptor::new(
                Arc::new(InMemoryStore::from_records(seed.dishes)),
                ids.clone(),
            ))
            .register(OrderDescriptor::new(
                Arc::new(InMemoryStore::from_records(seed.orders)),
                ids,
            ))
    }

    /// Register a resource
    pub fn register(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.entity_registry.register(Box::new(descriptor));
        self
    }

    /// Add routes outside the resource pattern
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Registered resource names
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// Build the final router
    pub fn build(self) -> Router {
        build_rest_router(&self.entity_registry, self.custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `addr`, serves until SIGTERM or Ctrl+C, then drains in-flight
    /// requests.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
