//! Order validation chains and business rules

use super::model::{Order, OrderStatus, whole_quantity};
use crate::core::validation::validators::{IdMatchesRoute, RecordExists, required};
use crate::core::{ApiError, Store, ValidationChain, ValidationContext, Validator};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// Validator: `data.dishes` is a non-empty array
#[derive(Debug, Clone, Copy, Default)]
pub struct HasDishes;

#[async_trait]
impl Validator<Order> for HasDishes {
    fn name(&self) -> &'static str {
        "dish-shape"
    }

    async fn check(&self, ctx: &mut ValidationContext<Order>) -> Result<(), ApiError> {
        match ctx.field("dishes") {
            Some(Value::Array(dishes)) if !dishes.is_empty() => Ok(()),
            _ => Err(ApiError::validation("Order must include at least one dish")),
        }
    }
}

/// Indices of dish lines whose `quantity` is not a whole number ≥ 1
///
/// Every line is inspected; nothing short-circuits. Whole floats such as
/// `2.0` are accepted.
pub fn invalid_quantities(dishes: &[Value]) -> Vec<usize> {
    dishes
        .iter()
        .enumerate()
        .filter(|(_, dish)| dish.get("quantity").and_then(whole_quantity).is_none())
        .map(|(index, _)| index)
        .collect()
}

/// Validator: every dish line carries a positive integer `quantity`
///
/// The first offending index is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct DishQuantities;

#[async_trait]
impl Validator<Order> for DishQuantities {
    fn name(&self) -> &'static str {
        "quantities"
    }

    async fn check(&self, ctx: &mut ValidationContext<Order>) -> Result<(), ApiError> {
        let Some(Value::Array(dishes)) = ctx.field("dishes") else {
            return Err(ApiError::validation("Order must include at least one dish"));
        };

        let offending = invalid_quantities(dishes);
        let Some(first) = offending.first() else {
            return Ok(());
        };
        if offending.len() > 1 {
            tracing::debug!(?offending, "several dish lines have invalid quantities");
        }

        Err(ApiError::validation(format!(
            "Dish {first} must have a quantity that is an integer greater than 0"
        )))
    }
}

/// Validator (update): the order is not delivered yet and the requested
/// status is one of the known values
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusTransition;

#[async_trait]
impl Validator<Order> for StatusTransition {
    fn name(&self) -> &'static str {
        "status"
    }

    async fn check(&self, ctx: &mut ValidationContext<Order>) -> Result<(), ApiError> {
        let current = ctx
            .bound()
            .map(|order| order.status)
            .ok_or_else(|| ApiError::internal("status check ran without a bound order"))?;
        if current.is_terminal() {
            return Err(ApiError::validation("A delivered order cannot be changed"));
        }

        match ctx.field("status").and_then(Value::as_str).and_then(OrderStatus::parse) {
            Some(_) => Ok(()),
            None => Err(ApiError::validation(STATUS_MESSAGE)),
        }
    }
}

/// Validator (create): `status` may be omitted, but if given must be known
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalStatus;

#[async_trait]
impl Validator<Order> for OptionalStatus {
    fn name(&self) -> &'static str {
        "create-status"
    }

    async fn check(&self, ctx: &mut ValidationContext<Order>) -> Result<(), ApiError> {
        match ctx.field("status") {
            None | Some(Value::Null) => Ok(()),
            Some(Value::String(s)) if OrderStatus::parse(s).is_some() => Ok(()),
            Some(_) => Err(ApiError::validation(STATUS_MESSAGE)),
        }
    }
}

/// Validator (delete): only pending orders may be removed
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingOnly;

#[async_trait]
impl Validator<Order> for PendingOnly {
    fn name(&self) -> &'static str {
        "pending-only"
    }

    async fn check(&self, ctx: &mut ValidationContext<Order>) -> Result<(), ApiError> {
        match ctx.bound().map(|order| order.status) {
            Some(OrderStatus::Pending) => Ok(()),
            Some(_) => Err(ApiError::validation(
                "An order cannot be deleted unless it is pending",
            )),
            None => Err(ApiError::internal("delete check ran without a bound order")),
        }
    }
}

/// The validation chains for every order operation
pub struct OrderChains {
    pub create: ValidationChain<Order>,
    pub read: ValidationChain<Order>,
    pub update: ValidationChain<Order>,
    pub delete: ValidationChain<Order>,
}

impl OrderChains {
    pub fn new(store: Arc<dyn Store<Order>>) -> Self {
        Self {
            create: with_payload_checks(ValidationChain::new("order.create")).then(OptionalStatus),
            read: ValidationChain::new("order.read").then(RecordExists::new(store.clone())),
            update: with_payload_checks(
                ValidationChain::new("order.update").then(RecordExists::new(store.clone())),
            )
            .then(StatusTransition)
            .then(IdMatchesRoute),
            delete: ValidationChain::new("order.delete")
                .then(RecordExists::new(store))
                .then(PendingOnly),
        }
    }
}

/// Field and dish-line checks shared by create and update, in declared order
fn with_payload_checks(chain: ValidationChain<Order>) -> ValidationChain<Order> {
    chain
        .then(required("deliverTo"))
        .then(required("mobileNumber"))
        .then(required("dishes"))
        .then(HasDishes)
        .then(DishQuantities)
}
