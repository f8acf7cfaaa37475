//! Reusable validators
//!
//! These validators are shared by every resource; messages use the
//! resource label from [`Record::RESOURCE`].

use super::{ValidationContext, Validator};
use crate::core::entity::Record;
use crate::core::error::ApiError;
use crate::core::store::Store;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// True when a payload value counts as provided: not null, not ""
pub fn is_provided(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Validator: `data[field]` is present, not null and not an empty string
#[derive(Debug, Clone, Copy)]
pub struct FieldPresent {
    field: &'static str,
}

/// Build a [`FieldPresent`] validator for `field`
pub fn required(field: &'static str) -> FieldPresent {
    FieldPresent { field }
}

#[async_trait]
impl<T: Record> Validator<T> for FieldPresent {
    fn name(&self) -> &'static str {
        self.field
    }

    async fn check(&self, ctx: &mut ValidationContext<T>) -> Result<(), ApiError> {
        if is_provided(ctx.field(self.field)) {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "{} must include a {}",
                T::RESOURCE,
                self.field
            )))
        }
    }
}

/// Validator: the route id names an existing record, which gets bound
pub struct RecordExists<T: Record> {
    store: Arc<dyn Store<T>>,
}

impl<T: Record> RecordExists<T> {
    pub fn new(store: Arc<dyn Store<T>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<T: Record> Validator<T> for RecordExists<T> {
    fn name(&self) -> &'static str {
        "exists"
    }

    async fn check(&self, ctx: &mut ValidationContext<T>) -> Result<(), ApiError> {
        let id = ctx.route_id()?.to_string();
        match self.store.find(&id).await? {
            Some(record) => {
                ctx.bind(record);
                Ok(())
            }
            None => Err(ApiError::not_found(format!(
                "{} does not exist: {}",
                T::RESOURCE,
                id
            ))),
        }
    }
}

/// Validator: a body `id`, when given, equals the route id
///
/// `null`, `false`, `0` and `""` count as not given.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdMatchesRoute;

#[async_trait]
impl<T: Record> Validator<T> for IdMatchesRoute {
    fn name(&self) -> &'static str {
        "id-match"
    }

    async fn check(&self, ctx: &mut ValidationContext<T>) -> Result<(), ApiError> {
        let route_id = ctx.route_id()?;
        let body_id = match ctx.field("id") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(()),
            Some(Value::String(s)) if s.is_empty() => return Ok(()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return Ok(()),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        if body_id == route_id {
            return Ok(());
        }

        Err(ApiError::validation(format!(
            "{resource} id does not match route id. {resource}: {body_id}, Route: {route_id}",
            resource = T::RESOURCE
        )))
    }
}
