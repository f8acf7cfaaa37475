//! Dish validation chains

use super::model::Dish;
use crate::core::validation::validators::{IdMatchesRoute, RecordExists, required};
use crate::core::{ApiError, Store, ValidationChain, ValidationContext, Validator};
use async_trait::async_trait;
use std::sync::Arc;

/// Validator: `data.price` is a number strictly greater than 0
///
/// Fractional prices are accepted; the message wording is kept as clients
/// already match on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositivePrice;

#[async_trait]
impl Validator<Dish> for PositivePrice {
    fn name(&self) -> &'static str {
        "price>0"
    }

    async fn check(&self, ctx: &mut ValidationContext<Dish>) -> Result<(), ApiError> {
        let price = ctx.field("price").and_then(|price| price.as_f64());
        match price {
            Some(price) if price > 0.0 => Ok(()),
            _ => Err(ApiError::validation(
                "Dish must have a price that is an integer greater than 0",
            )),
        }
    }
}

/// The validation chains for every dish operation
pub struct DishChains {
    pub create: ValidationChain<Dish>,
    pub read: ValidationChain<Dish>,
    pub update: ValidationChain<Dish>,
}

impl DishChains {
    pub fn new(store: Arc<dyn Store<Dish>>) -> Self {
        Self {
            create: with_payload_checks(ValidationChain::new("dish.create")),
            read: ValidationChain::new("dish.read").then(RecordExists::new(store.clone())),
            update: with_payload_checks(
                ValidationChain::new("dish.update").then(RecordExists::new(store)),
            )
            .then(IdMatchesRoute),
        }
    }
}

/// Field checks shared by create and update, in declared order
fn with_payload_checks(chain: ValidationChain<Dish>) -> ValidationChain<Dish> {
    chain
        .then(required("name"))
        .then(required("description"))
        .then(required("image_url"))
        .then(required("price"))
        .then(PositivePrice)
}
