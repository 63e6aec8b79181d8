//! Stop entity
//!
//! A stop is created when an order needs a pickup or delivery at a place no
//! other admitted order already visits, grows or shrinks its linked orders as
//! orders come and go, and disappears with its last linked order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Location, OrderId, StopId, StopType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub stop_type: StopType,
    pub location: Location,
    pub linked_order_ids: BTreeSet<OrderId>,
    /// Position in the route; `None` until the sequencer places the stop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_index: Option<usize>,
    /// Sum of linked order weights (informational, no capacity rule applies)
    #[serde(default)]
    pub total_weight: f64,
    #[serde(default)]
    pub total_pallets: u32,
}

impl Stop {
    /// Create an unsequenced stop with no linked orders
    pub fn new(id: StopId, stop_type: StopType, location: Location) -> Self {
        Self {
            id,
            stop_type,
            location,
            linked_order_ids: BTreeSet::new(),
            sequence_index: None,
            total_weight: 0.0,
            total_pallets: 0,
        }
    }

    /// Link an order and fold its freight into the stop totals
    pub fn link(&mut self, order_id: OrderId, weight: f64, pallets: u32) {
        if self.linked_order_ids.insert(order_id) {
            self.total_weight += weight;
            self.total_pallets += pallets;
        }
    }

    pub fn serves(&self, order_id: &OrderId) -> bool {
        self.linked_order_ids.contains(order_id)
    }

    /// Returns true if this stop shares at least one order with `other`
    pub fn shares_order_with(&self, other: &Stop) -> bool {
        !self.linked_order_ids.is_disjoint(&other.linked_order_ids)
    }

    pub fn is_pickup(&self) -> bool {
        self.stop_type.is_pickup()
    }

    pub fn is_sequenced(&self) -> bool {
        self.sequence_index.is_some()
    }

    /// Short label for listings ("pickup @ 1 Port Way, Los Angeles, CA 90210")
    pub fn label(&self) -> String {
        format!("{} @ {}", self.stop_type, self.location)
    }
}
