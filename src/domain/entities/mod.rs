//! Domain Entities
//!
//! Core planning entities.
//! - `Order` - A freight order supplied by the order catalog
//! - `Stop` - A physical pickup or delivery serving one or more orders

mod order;
mod stop;

pub use order::{Order, OrderError};
pub use stop::Stop;
