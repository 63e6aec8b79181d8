//! Planning Event Port
//!
//! Provides an observable interface for consolidation sessions.
//! Enables JSON event streams, audit trails, and debugging.

use crate::domain::rejection::Rejection;
use crate::domain::value_objects::OrderId;

/// Event emitted by a consolidation session
#[derive(Debug, Clone, PartialEq)]
pub enum PlanningEvent {
    /// Order admitted into the shipment
    OrderAdmitted {
        session: String,
        order_id: OrderId,
        version: u64,
        stop_count: usize,
    },

    /// Order refused by the compatibility rules
    OrderRejected {
        session: String,
        order_id: OrderId,
        rejection: Rejection,
    },

    /// Order taken out of the shipment
    OrderRemoved {
        session: String,
        order_id: OrderId,
        version: u64,
        stop_count: usize,
    },

    /// Removal of an order that is not in the shipment
    RemovalRejected {
        session: String,
        order_id: OrderId,
        rejection: Rejection,
    },

    /// Manual stop move accepted
    StopsReordered {
        session: String,
        from: usize,
        to: usize,
        version: u64,
    },

    /// Manual stop move refused
    ReorderRejected {
        session: String,
        from: usize,
        to: usize,
        rejection: Rejection,
    },

    /// All orders cleared from the shipment
    SessionCleared {
        session: String,
        removed: usize,
        version: u64,
    },
}

impl PlanningEvent {
    /// Event name used in serialized streams
    pub fn name(&self) -> &'static str {
        match self {
            PlanningEvent::OrderAdmitted { .. } => "order_admitted",
            PlanningEvent::OrderRejected { .. } => "order_rejected",
            PlanningEvent::OrderRemoved { .. } => "order_removed",
            PlanningEvent::RemovalRejected { .. } => "removal_rejected",
            PlanningEvent::StopsReordered { .. } => "stops_reordered",
            PlanningEvent::ReorderRejected { .. } => "reorder_rejected",
            PlanningEvent::SessionCleared { .. } => "session_cleared",
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            PlanningEvent::OrderRejected { .. }
                | PlanningEvent::RemovalRejected { .. }
                | PlanningEvent::ReorderRejected { .. }
        )
    }
}

/// Trait for receiving planning events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: Silent operation
pub trait PlanningEventSink: Send + Sync {
    /// Handle a planning event
    fn on_event(&self, event: PlanningEvent);

    /// Check if this sink wants rejection events as well as accepted changes
    fn wants_rejections(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PlanningEventSink for NoopEventSink {
    fn on_event(&self, _event: PlanningEvent) {}

    fn wants_rejections(&self) -> bool {
        false
    }
}
