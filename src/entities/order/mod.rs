//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod validators;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{Order, OrderDraft, OrderItem, OrderStatus};
pub use validators::OrderChains;
