//! Record trait defining the core abstraction for stored resources

use serde::Serialize;
use std::fmt::Debug;

/// Base trait for every record held in a [`Store`](crate::core::store::Store).
///
/// A record has:
/// - an opaque string identifier, unique within its collection and
///   immutable once assigned
/// - a resource label used in client-facing messages ("Dish", "Order")
pub trait Record: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Capitalized resource label used in error messages (e.g., "Dish")
    const RESOURCE: &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;
}
