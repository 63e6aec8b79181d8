//! Order entity
//!
//! Orders are owned by the external order-management service. The engine
//! only reads them; they are immutable once fetched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::{EquipmentType, FreightMode, Location, OrderId, StopType};

/// Reasons an order record is unusable for planning
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("order id must not be blank")]
    BlankId,

    #[error("order {id}: weight must be a positive number (got {weight})")]
    InvalidWeight { id: OrderId, weight: f64 },

    #[error("order {id}: {leg} location is missing {field}")]
    IncompleteLocation {
        id: OrderId,
        leg: StopType,
        field: &'static str,
    },
}

/// A freight order as the planning engine sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub origin: Location,
    pub destination: Location,
    pub equipment_type: EquipmentType,
    pub mode: FreightMode,
    /// Gross weight in pounds
    pub weight: f64,
    #[serde(default)]
    pub pallet_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        origin: Location,
        destination: Location,
        equipment_type: EquipmentType,
        mode: FreightMode,
        weight: f64,
        pallet_count: u32,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            origin,
            destination,
            equipment_type,
            mode,
            weight,
            pallet_count,
            customer: None,
            po_number: None,
        };
        order.validate()?;
        Ok(order)
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_po_number(mut self, po_number: impl Into<String>) -> Self {
        self.po_number = Some(po_number.into());
        self
    }

    /// Check the facts the engine relies on
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_blank() {
            return Err(OrderError::BlankId);
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(OrderError::InvalidWeight {
                id: self.id.clone(),
                weight: self.weight,
            });
        }
        for leg in [StopType::Pickup, StopType::Delivery] {
            if let Some(field) = self.location_for(leg).missing_component() {
                return Err(OrderError::IncompleteLocation {
                    id: self.id.clone(),
                    leg,
                    field,
                });
            }
        }
        Ok(())
    }

    /// Location served by the given leg of this order
    pub fn location_for(&self, leg: StopType) -> &Location {
        match leg {
            StopType::Pickup => &self.origin,
            StopType::Delivery => &self.destination,
        }
    }

    /// Full-truckload orders never share a trailer or a stop
    pub fn is_exclusive(&self) -> bool {
        self.mode.is_ftl()
    }
}
