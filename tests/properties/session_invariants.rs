//! Property tests for session invariants under random edit sequences.

use std::sync::Arc;

use proptest::prelude::*;

use loadplan::domain::services::{leg_positions, Invariants};
use loadplan::{ConsolidationSession, OrderId, SessionError, Snapshot};

use crate::strategies::{any_shape, OrderShape};

#[derive(Debug, Clone)]
enum Op {
    Add(OrderShape),
    Remove(usize),
    Move(usize, usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any_shape(5).prop_map(Op::Add),
        2 => (0..16usize).prop_map(Op::Remove),
        4 => (0..12usize, 0..12usize).prop_map(|(from, to)| Op::Move(from, to)),
        1 => Just(Op::Clear),
    ]
}

fn apply(session: &ConsolidationSession, op: &Op) -> Result<Arc<Snapshot>, SessionError> {
    match op {
        Op::Add(shape) => session.add_order(shape.build()),
        Op::Remove(id) => session.remove_order(&OrderId::new(format!("O{:02}", id))),
        Op::Move(from, to) => session.reorder_stops(*from, *to),
        Op::Clear => session.clear(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every published snapshot satisfies the session invariants,
    /// and refused edits leave the session exactly as it was.
    #[test]
    fn property_invariants_hold_after_every_edit(ops in prop::collection::vec(op(), 1..40)) {
        let session = ConsolidationSession::new("SHIP-PROP");

        for op in &ops {
            let before = session.snapshot();
            match apply(&session, op) {
                Ok(after) => {
                    prop_assert!(after.version == before.version || after.version == before.version + 1);
                    prop_assert!(Arc::ptr_eq(&after, &session.snapshot()));
                }
                Err(SessionError::Rejected(_)) => {
                    prop_assert!(Arc::ptr_eq(&before, &session.snapshot()));
                }
                Err(SessionError::Internal(violation)) => {
                    prop_assert!(false, "internal error after {:?}: {}", op, violation);
                }
            }

            let current = session.snapshot();
            prop_assert_eq!(Invariants::check(&current.orders, &current.stops), Ok(()));
            for (i, stop) in current.stops.iter().enumerate() {
                prop_assert_eq!(stop.sequence_index, Some(i));
            }
            for order in &current.orders {
                let (pickup, delivery) = leg_positions(&current.stops, &order.id);
                prop_assert!(pickup.zip(delivery).is_some_and(|(p, d)| p < d));
            }
        }
    }

    /// PROPERTY: A full-truckload order is always alone in its shipment.
    #[test]
    fn property_ftl_is_exclusive(ops in prop::collection::vec(op(), 1..30)) {
        let session = ConsolidationSession::new("SHIP-PROP");

        for op in &ops {
            let _ = apply(&session, op);
            let current = session.snapshot();
            if current.orders.iter().any(|o| o.is_exclusive()) {
                prop_assert_eq!(current.orders.len(), 1);
                prop_assert_eq!(current.stops.len(), 2);
            }
        }
    }

    /// PROPERTY: Every order in a shipment uses the same equipment.
    #[test]
    fn property_equipment_is_uniform(ops in prop::collection::vec(op(), 1..30)) {
        let session = ConsolidationSession::new("SHIP-PROP");

        for op in &ops {
            let _ = apply(&session, op);
            let current = session.snapshot();
            if let Some(first) = current.orders.first() {
                prop_assert!(current.orders.iter().all(|o| o.equipment_type == first.equipment_type));
            }
        }
    }
}
