//! # GrubDash
//!
//! REST API for a food-delivery service: a catalogue of dishes and the
//! orders placed against it, kept in in-memory collections.
//!
//! ## Features
//!
//! - **Validation chains**: every request runs an ordered list of checks;
//!   the first failure answers the request and nothing is mutated
//! - **Order lifecycle**: pending → preparing → out-for-delivery → delivered,
//!   with delivered orders frozen and only pending orders deletable
//! - **Uniform errors**: every failure is `{"error": message, "code": CODE}`
//! - **Seeding**: initial dishes and orders from a YAML or JSON file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let seed = SeedData::from_yaml_file("data/seed.yaml")?;
//! ServerBuilder::from_seed(seed).serve("127.0.0.1:5000").await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, DataResponse, Envelope, IdGenerator, Record, ResourceState,
        SequentialIdGenerator, Store, UuidIdGenerator, ValidationChain, ValidationContext,
        Validator,
    };

    // === Resources ===
    pub use crate::entities::{
        Dish, DishDescriptor, Order, OrderDescriptor, OrderItem, OrderStatus,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryStore, SeedData};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
