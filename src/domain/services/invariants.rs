//! Session invariant checks
//!
//! A violation here is a bug in the engine, never bad input. It is reported
//! through its own error type so it cannot be mistaken for a `Rejection`.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::domain::entities::{Order, Stop};
use crate::domain::services::sequencer::leg_positions;
use crate::domain::value_objects::{OrderId, StopId, StopType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("stop {stop_id} has no linked orders")]
    OrphanStop { stop_id: StopId },

    #[error("stop {stop_id} appears more than once in the route")]
    DuplicateStop { stop_id: StopId },

    #[error("stop {stop_id} links unknown order {order_id}")]
    UnknownOrder { stop_id: StopId, order_id: OrderId },

    #[error("stop at position {position} has sequence index {found:?}")]
    SequenceNotDense {
        position: usize,
        found: Option<usize>,
    },

    #[error("order {order_id} has {count} {leg} stops (expected exactly one)")]
    LegCount {
        order_id: OrderId,
        leg: StopType,
        count: usize,
    },

    #[error("order {order_id} is picked up at {pickup_index} but delivered at {delivery_index}")]
    PrecedenceBroken {
        order_id: OrderId,
        pickup_index: usize,
        delivery_index: usize,
    },

    #[error("full-truckload order {order_id} shares stop {stop_id}")]
    SharedExclusiveStop { order_id: OrderId, stop_id: StopId },

    #[error("full-truckload order {order_id} is consolidated with {others} other order(s)")]
    ExclusiveOrderNotAlone { order_id: OrderId, others: usize },
}

pub struct Invariants;

impl Invariants {
    /// Verify every session invariant for `orders` planned as `stops`
    pub fn check(orders: &[Order], stops: &[Stop]) -> Result<(), InvariantViolation> {
        let by_id: HashMap<&OrderId, &Order> = orders.iter().map(|o| (&o.id, o)).collect();

        let mut seen: HashSet<&StopId> = HashSet::new();
        for (position, stop) in stops.iter().enumerate() {
            if !seen.insert(&stop.id) {
                return Err(InvariantViolation::DuplicateStop {
                    stop_id: stop.id.clone(),
                });
            }
            if stop.sequence_index != Some(position) {
                return Err(InvariantViolation::SequenceNotDense {
                    position,
                    found: stop.sequence_index,
                });
            }
            if stop.linked_order_ids.is_empty() {
                return Err(InvariantViolation::OrphanStop {
                    stop_id: stop.id.clone(),
                });
            }
            for order_id in &stop.linked_order_ids {
                let Some(order) = by_id.get(order_id) else {
                    return Err(InvariantViolation::UnknownOrder {
                        stop_id: stop.id.clone(),
                        order_id: order_id.clone(),
                    });
                };
                if order.is_exclusive() && stop.linked_order_ids.len() > 1 {
                    return Err(InvariantViolation::SharedExclusiveStop {
                        order_id: order_id.clone(),
                        stop_id: stop.id.clone(),
                    });
                }
            }
        }

        for order in orders {
            if order.is_exclusive() && orders.len() > 1 {
                return Err(InvariantViolation::ExclusiveOrderNotAlone {
                    order_id: order.id.clone(),
                    others: orders.len() - 1,
                });
            }

            for leg in [StopType::Pickup, StopType::Delivery] {
                let count = stops
                    .iter()
                    .filter(|s| s.stop_type == leg && s.serves(&order.id))
                    .count();
                if count != 1 {
                    return Err(InvariantViolation::LegCount {
                        order_id: order.id.clone(),
                        leg,
                        count,
                    });
                }
            }

            if let (Some(pickup_index), Some(delivery_index)) = leg_positions(stops, &order.id) {
                if pickup_index >= delivery_index {
                    return Err(InvariantViolation::PrecedenceBroken {
                        order_id: order.id.clone(),
                        pickup_index,
                        delivery_index,
                    });
                }
            }
        }

        Ok(())
    }
}
