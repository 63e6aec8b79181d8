//! Application Layer
//!
//! Use cases that orchestrate the planning flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConsolidationSession` - One shipment being planned; serializes edits and publishes snapshots
//! - `PlanningUseCase` - Resolves orders from a catalog and drives a session

pub mod planning;
pub mod session;
pub mod snapshot;

pub use planning::{
    PlanOutcome, PlanRequest, PlanStep, PlanningUseCase, PreviewOutcome, StepFailure, StepOutcome,
};
pub use session::{
    CandidateVerdict, ConsolidationSession, PlanningCommand, SessionError, SessionResult,
};
pub use snapshot::{PlanTotals, ShipmentPlan, ShipmentType, Snapshot};
