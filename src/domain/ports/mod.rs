//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod order_catalog;
pub mod planning_events;

pub use order_catalog::{CatalogError, CatalogResult, OrderCatalog};
pub use planning_events::{NoopEventSink, PlanningEvent, PlanningEventSink};
