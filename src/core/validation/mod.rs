//! Validation chain system
//!
//! Every mutating or lookup request runs an ordered [`ValidationChain`]
//! before its handler. Each step is a [`Validator`] that either lets the
//! request through or fails it with an [`ApiError`]. The first failure stops
//! the chain: later validators and the handler never run, so a rejected
//! request cannot mutate anything.
//!
//! Validators share a per-request [`ValidationContext`] holding the `data`
//! envelope, the route identifier, and the record bound by an existence check.

pub mod extractor;
pub mod validators;

pub use extractor::Envelope;

use crate::core::entity::Record;
use crate::core::error::ApiError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A single check-or-fail step of a validation chain
#[async_trait]
pub trait Validator<T: Record>: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Pass (`Ok`) or stop the chain with an error
    async fn check(&self, ctx: &mut ValidationContext<T>) -> Result<(), ApiError>;
}

/// Per-request state seen by validators
#[derive(Debug, Clone)]
pub struct ValidationContext<T> {
    data: Map<String, Value>,
    route_id: Option<String>,
    bound: Option<T>,
}

impl<T: Record> ValidationContext<T> {
    /// Context for a request carrying `data`
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            data,
            route_id: None,
            bound: None,
        }
    }

    /// Attach the identifier taken from the request path
    pub fn with_route_id(mut self, id: impl Into<String>) -> Self {
        self.route_id = Some(id.into());
        self
    }

    /// Field of the `data` envelope, if present
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Route identifier, failing if the chain was mounted on a route without one
    pub fn route_id(&self) -> Result<&str, ApiError> {
        self.route_id
            .as_deref()
            .ok_or_else(|| ApiError::internal(format!("{} chain has no route id", T::RESOURCE)))
    }

    /// Expose a located record to downstream validators and the handler
    pub fn bind(&mut self, record: T) {
        self.bound = Some(record);
    }

    pub fn bound(&self) -> Option<&T> {
        self.bound.as_ref()
    }

    /// Take the bound record out of the context
    ///
    /// Fails if no existence check ran, which means the chain is misconfigured.
    pub fn take_bound(&mut self) -> Result<T, ApiError> {
        self.bound
            .take()
            .ok_or_else(|| ApiError::internal(format!("no {} bound to request", T::RESOURCE)))
    }

    /// Consume the context, keeping the validated `data` envelope
    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }
}

/// Ordered list of validators run with short-circuit semantics
pub struct ValidationChain<T: Record> {
    name: &'static str,
    steps: Vec<Box<dyn Validator<T>>>,
}

impl<T: Record> ValidationChain<T> {
    /// Create an empty chain; `name` identifies it in logs (e.g. "dish.create")
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a validator after the existing ones
    pub fn then(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.steps.push(Box::new(validator));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validator names in execution order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every validator in order, stopping at the first failure
    pub async fn run(&self, ctx: &mut ValidationContext<T>) -> Result<(), ApiError> {
        for step in &self.steps {
            if let Err(err) = step.check(ctx).await {
                tracing::debug!(
                    chain = self.name,
                    validator = step.name(),
                    status = err.status_code().as_u16(),
                    error = %err,
                    "validation chain stopped"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
