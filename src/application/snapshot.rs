//! Session snapshots and finalized shipment plans
//!
//! A `Snapshot` is the immutable state a session publishes after each
//! successful mutation. Readers hold it behind an `Arc` and never observe a
//! half-applied change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Order, Stop};
use crate::domain::rejection::Rejection;
use crate::domain::value_objects::{EquipmentType, OrderId, StopType};

/// Consolidated shipment kind.
///
/// There is no "mixed" kind: full-truckload orders are never consolidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentType {
    #[serde(rename = "FTL")]
    Ftl,
    #[serde(rename = "LTL")]
    Ltl,
}

impl std::fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipmentType::Ftl => write!(f, "FTL"),
            ShipmentType::Ltl => write!(f, "LTL"),
        }
    }
}

/// Aggregate freight figures for a shipment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanTotals {
    pub orders: usize,
    pub stops: usize,
    pub pallets: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub session_id: String,
    pub version: u64,
    /// Orders in admission order
    pub orders: Vec<Order>,
    /// Stops in visit order; `stops[i].sequence_index == Some(i)`
    pub stops: Vec<Stop>,
}

impl Snapshot {
    pub(crate) fn empty(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            version: 0,
            orders: Vec::new(),
            stops: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    pub fn contains_order(&self, id: &OrderId) -> bool {
        self.order(id).is_some()
    }

    pub fn order_ids(&self) -> Vec<OrderId> {
        self.orders.iter().map(|o| o.id.clone()).collect()
    }

    /// The stop serving the given leg of an order
    pub fn stop_for(&self, id: &OrderId, leg: StopType) -> Option<&Stop> {
        self.stops
            .iter()
            .find(|s| s.stop_type == leg && s.serves(id))
    }

    pub fn pickup_of(&self, id: &OrderId) -> Option<&Stop> {
        self.stop_for(id, StopType::Pickup)
    }

    pub fn delivery_of(&self, id: &OrderId) -> Option<&Stop> {
        self.stop_for(id, StopType::Delivery)
    }

    /// Equipment every order in the shipment uses
    pub fn equipment_type(&self) -> Option<EquipmentType> {
        self.orders.first().map(|o| o.equipment_type)
    }

    pub fn shipment_type(&self) -> Option<ShipmentType> {
        let first = self.orders.first()?;
        Some(if first.is_exclusive() {
            ShipmentType::Ftl
        } else {
            ShipmentType::Ltl
        })
    }

    pub fn totals(&self) -> PlanTotals {
        PlanTotals {
            orders: self.orders.len(),
            stops: self.stops.len(),
            pallets: self.orders.iter().map(|o| o.pallet_count).sum(),
            weight: self.orders.iter().map(|o| o.weight).sum(),
        }
    }

    /// Freeze this snapshot into a plan ready for persistence
    pub fn finalize(&self) -> Result<ShipmentPlan, Rejection> {
        self.finalize_at(Utc::now())
    }

    /// Like `finalize` with an explicit planning timestamp
    pub fn finalize_at(&self, planned_at: DateTime<Utc>) -> Result<ShipmentPlan, Rejection> {
        let (Some(shipment_type), Some(equipment_type)) =
            (self.shipment_type(), self.equipment_type())
        else {
            return Err(Rejection::EmptyShipment);
        };

        Ok(ShipmentPlan {
            shipment_id: self.session_id.clone(),
            shipment_type,
            equipment_type,
            version: self.version,
            planned_at,
            orders: self.order_ids(),
            stops: self.stops.clone(),
            totals: self.totals(),
        })
    }
}

/// A finalized shipment: the record handed to downstream persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPlan {
    pub shipment_id: String,
    pub shipment_type: ShipmentType,
    pub equipment_type: EquipmentType,
    /// Session version the plan was taken from
    pub version: u64,
    pub planned_at: DateTime<Utc>,
    pub orders: Vec<OrderId>,
    pub stops: Vec<Stop>,
    pub totals: PlanTotals,
}
