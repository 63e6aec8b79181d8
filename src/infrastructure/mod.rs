//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - Order catalogs (in-memory, TOML file)
//! - `events/` - Planning event sinks (NDJSON)
//! - `plan_writer` - Finalized plan persistence

pub mod catalog;
pub mod events;
pub mod plan_writer;

// Re-export for convenience
pub use catalog::{InMemoryOrderCatalog, TomlOrderCatalog};
pub use events::JsonEventSink;
pub use plan_writer::JsonPlanWriter;
