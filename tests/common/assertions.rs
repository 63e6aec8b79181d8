//! Assertion helpers for session state.

use loadplan::domain::services::{leg_positions, Invariants};
use loadplan::{Snapshot, Stop, StopType};

/// Assert that every session invariant holds for `snapshot`
pub fn assert_consistent(snapshot: &Snapshot) {
    if let Err(violation) = Invariants::check(&snapshot.orders, &snapshot.stops) {
        panic!(
            "Snapshot v{} is inconsistent: {}\nStops:\n  {}",
            snapshot.version,
            violation,
            route(&snapshot.stops).join("\n  ")
        );
    }
}

/// Assert that each order's pickup precedes its delivery
pub fn assert_precedence(snapshot: &Snapshot) {
    for order in &snapshot.orders {
        let (pickup, delivery) = leg_positions(&snapshot.stops, &order.id);
        match (pickup, delivery) {
            (Some(p), Some(d)) => assert!(
                p < d,
                "Order {} is picked up at {} but delivered at {}",
                order.id,
                p,
                d
            ),
            _ => panic!("Order {} is missing a leg", order.id),
        }
    }
}

/// `"P:City"` / `"D:City"` labels in visit order
pub fn route(stops: &[Stop]) -> Vec<String> {
    stops
        .iter()
        .map(|s| {
            let prefix = match s.stop_type {
                StopType::Pickup => "P",
                StopType::Delivery => "D",
            };
            format!("{}:{}", prefix, s.location.city)
        })
        .collect()
}
