//! Planning rejections
//!
//! Expected business-rule failures. Every rejection is recoverable: the
//! session state is untouched and the caller decides how to surface it.

use thiserror::Error;

use crate::domain::value_objects::{EquipmentType, FreightMode, OrderId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Candidate needs a different trailer than the orders already planned
    #[error("equipment mismatch: order {candidate} requires {found}, shipment is configured for {required}")]
    EquipmentMismatch {
        candidate: OrderId,
        required: EquipmentType,
        found: EquipmentType,
    },

    /// A full-truckload order cannot share the shipment with anything
    #[error("order {candidate} ({mode}) cannot be consolidated: full-truckload shipments carry exactly one order")]
    FtlExclusivityViolation {
        candidate: OrderId,
        mode: FreightMode,
    },

    /// Order record fails validation (blank id, non-positive weight, incomplete address)
    #[error("order {order_id} cannot be planned: {reason}")]
    InvalidOrder { order_id: OrderId, reason: String },

    #[error("order {order_id} is already part of this shipment")]
    DuplicateOrder { order_id: OrderId },

    #[error("order {order_id} is not part of this shipment")]
    OrderNotFound { order_id: OrderId },

    /// A move would put an order's delivery at or before its pickup
    #[error("moving the stop would place the delivery of order {order_id} (position {delivery_index}) at or before its pickup (position {pickup_index})")]
    PrecedenceViolation {
        order_id: OrderId,
        pickup_index: usize,
        delivery_index: usize,
    },

    #[error("stop position {index} is out of range (shipment has {len} stops)")]
    StopIndexOutOfRange { index: usize, len: usize },

    /// Optimistic-concurrency check failed
    #[error("shipment changed since it was read (expected version {expected}, current version {actual})")]
    StaleVersion { expected: u64, actual: u64 },

    #[error("assign at least one order before saving the shipment")]
    EmptyShipment,
}

impl Rejection {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::EquipmentMismatch { .. } => "equipment_mismatch",
            Rejection::FtlExclusivityViolation { .. } => "ftl_exclusivity_violation",
            Rejection::InvalidOrder { .. } => "invalid_order",
            Rejection::DuplicateOrder { .. } => "duplicate_order",
            Rejection::OrderNotFound { .. } => "order_not_found",
            Rejection::PrecedenceViolation { .. } => "precedence_violation",
            Rejection::StopIndexOutOfRange { .. } => "stop_index_out_of_range",
            Rejection::StaleVersion { .. } => "stale_version",
            Rejection::EmptyShipment => "empty_shipment",
        }
    }
}
