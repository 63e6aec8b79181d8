//! Event Sink Implementations
//!
//! Provides concrete implementations of PlanningEventSink:
//! - JsonEventSink: NDJSON output for automation and audit trails

mod json;

pub use json::JsonEventSink;
