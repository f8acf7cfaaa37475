//! Core module containing fundamental traits and types for the API

pub mod entity;
pub mod error;
pub mod id;
pub mod resource;
pub mod store;
pub mod validation;

pub use entity::Record;
pub use error::{ApiError, ErrorResponse};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator, fresh_id};
pub use resource::{DataResponse, ResourceState, decode_payload};
pub use store::Store;
pub use validation::{Envelope, ValidationChain, ValidationContext, Validator};
