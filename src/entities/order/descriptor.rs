//! Entity descriptor for Order

use super::handlers::{
    OrderAppState, create_order, delete_order, list_orders, read_order, update_order,
};
use super::model::Order;
use super::validators::OrderChains;
use crate::core::{IdGenerator, Store};
use crate::server::{EntityDescriptor, method_not_allowed};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    state: OrderAppState,
}

impl OrderDescriptor {
    pub fn new(store: Arc<dyn Store<Order>>, ids: Arc<dyn IdGenerator>) -> Self {
        let chains = OrderChains::new(store.clone());
        Self {
            state: OrderAppState::new(store, ids, chains),
        }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/orders",
                get(list_orders)
                    .post(create_order)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{order_id}",
                get(read_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .with_state(self.state.clone())
    }
}
