//! loadplan - shipment consolidation and stop-sequencing engine
//!
//! Groups freight orders into a shipment, derives the physical stops the
//! truck must make, and keeps a precedence-valid visit order as orders are
//! added, removed, or manually rearranged.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ConsolidationSession, PlanOutcome, PlanRequest, PlanningCommand, PlanningUseCase,
    SessionError, ShipmentPlan, Snapshot,
};
pub use config::Config;
pub use domain::entities::{Order, Stop};
pub use domain::policies::{CompatibilityPolicy, Verdict};
pub use domain::rejection::Rejection;
pub use domain::value_objects::{EquipmentType, FreightMode, Location, OrderId, StopId, StopType};
pub use error::{LoadplanError, LoadplanResult};
