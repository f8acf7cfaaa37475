//! Entity descriptor for Dish

use super::handlers::{DishAppState, create_dish, list_dishes, read_dish, update_dish};
use super::model::Dish;
use super::validators::DishChains;
use crate::core::{IdGenerator, Store};
use crate::server::{EntityDescriptor, method_not_allowed};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    state: DishAppState,
}

impl DishDescriptor {
    pub fn new(store: Arc<dyn Store<Dish>>, ids: Arc<dyn IdGenerator>) -> Self {
        let chains = DishChains::new(store.clone());
        Self {
            state: DishAppState::new(store, ids, chains),
        }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/dishes",
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{dish_id}",
                get(read_dish).put(update_dish).fallback(method_not_allowed),
            )
            .with_state(self.state.clone())
    }
}
