//! Storage implementations

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryStore;
pub use seed::SeedData;
