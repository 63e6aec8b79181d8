//! Domain Value Objects
//!
//! Immutable value types that represent planning concepts.

mod equipment;
mod location;
mod order_id;
mod stop_id;
mod stop_type;

pub use equipment::{EquipmentType, FreightMode};
pub use location::{Coordinates, Location, LocationKey};
pub use order_id::OrderId;
pub use stop_id::StopId;
pub use stop_type::StopType;
