//! Resources exposed by the API

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor};
pub use order::{Order, OrderDescriptor, OrderItem, OrderStatus};
