//! Stop sequencing service
//!
//! Keeps the visit order of a shipment's stops consistent as orders come and
//! go, and validates manual drag-and-drop moves.
//!
//! Every route returned from this module satisfies:
//! - each order's pickup comes strictly before its delivery
//! - `sequence_index` equals the stop's position (dense, zero-based)

use std::collections::HashMap;

use crate::domain::entities::Stop;
use crate::domain::rejection::Rejection;
use crate::domain::value_objects::{OrderId, StopId, StopType};

/// Positions of an order's pickup and delivery stops within `stops`
pub fn leg_positions(stops: &[Stop], order_id: &OrderId) -> (Option<usize>, Option<usize>) {
    let position = |leg: StopType| {
        stops
            .iter()
            .position(|s| s.stop_type == leg && s.serves(order_id))
    };
    (position(StopType::Pickup), position(StopType::Delivery))
}

pub struct Sequencer;

impl Sequencer {
    /// Fold a freshly derived stop set into the previous route.
    ///
    /// - stops present before and after keep their relative order
    /// - a new delivery goes right after the latest pickup it shares an order with
    /// - a new pickup goes right before the earliest delivery it shares an order with
    /// - anything else is appended
    /// - vanished stops are dropped and the route is re-densified
    ///
    /// A surviving delivery that a newly merged order would leave ahead of its
    /// pickup is moved to just after that pickup; no other surviving stop moves.
    pub fn reconcile(previous: &[Stop], derived: Vec<Stop>) -> Vec<Stop> {
        let mut fresh: HashMap<StopId, Stop> =
            derived.into_iter().map(|s| (s.id.clone(), s)).collect();

        let mut ordered: Vec<&Stop> = previous.iter().collect();
        ordered.sort_by_key(|s| s.sequence_index.unwrap_or(usize::MAX));

        let mut route: Vec<Stop> = ordered
            .into_iter()
            .filter_map(|old| fresh.remove(&old.id))
            .collect();

        let mut arrivals: Vec<Stop> = fresh.into_values().collect();
        arrivals.sort_by(|a, b| {
            a.stop_type
                .cmp(&b.stop_type)
                .then_with(|| a.id.cmp(&b.id))
        });

        for stop in arrivals {
            let at = Self::insertion_point(&route, &stop);
            route.insert(at, stop);
        }

        Self::restore_precedence(&mut route);
        Self::densify(&mut route);
        route
    }

    /// Move the stop at `from` to `to`.
    ///
    /// The moved stop lands exactly at `to`; the others shift by one place
    /// at most and keep their relative order. The move is rejected as a whole
    /// if any order served by the moved stop would end up with its delivery at
    /// or before its pickup.
    pub fn reorder(stops: &[Stop], from: usize, to: usize) -> Result<Vec<Stop>, Rejection> {
        let len = stops.len();
        for index in [from, to] {
            if index >= len {
                return Err(Rejection::StopIndexOutOfRange { index, len });
            }
        }

        let mut route = stops.to_vec();
        let moved = route.remove(from);
        route.insert(to, moved);

        for order_id in &route[to].linked_order_ids {
            if let (Some(pickup_index), Some(delivery_index)) = leg_positions(&route, order_id) {
                if delivery_index <= pickup_index {
                    return Err(Rejection::PrecedenceViolation {
                        order_id: order_id.clone(),
                        pickup_index,
                        delivery_index,
                    });
                }
            }
        }

        Self::densify(&mut route);
        Ok(route)
    }

    /// Assign `sequence_index` from position
    pub fn densify(route: &mut [Stop]) {
        for (index, stop) in route.iter_mut().enumerate() {
            stop.sequence_index = Some(index);
        }
    }

    fn insertion_point(route: &[Stop], stop: &Stop) -> usize {
        let counterpart = stop.stop_type.counterpart();
        let related = route
            .iter()
            .enumerate()
            .filter(|(_, s)| s.stop_type == counterpart && s.shares_order_with(stop))
            .map(|(i, _)| i);

        match stop.stop_type {
            StopType::Delivery => related.max().map_or(route.len(), |i| i + 1),
            StopType::Pickup => related.min().unwrap_or(route.len()),
        }
    }

    fn restore_precedence(route: &mut Vec<Stop>) {
        let deliveries: Vec<StopId> = route
            .iter()
            .filter(|s| !s.is_pickup())
            .map(|s| s.id.clone())
            .collect();

        for id in deliveries {
            let Some(position) = route.iter().position(|s| s.id == id) else {
                continue;
            };
            let latest_pickup = route
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_pickup() && s.shares_order_with(&route[position]))
                .map(|(i, _)| i)
                .max();

            if let Some(pickup) = latest_pickup.filter(|&p| p > position) {
                tracing::debug!(stop = %id, from = position, to = pickup, "moving shared delivery behind its pickup");
                let stop = route.remove(position);
                route.insert(pickup, stop);
            }
        }
    }
}
