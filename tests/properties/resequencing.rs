//! Property tests for route stability and manual moves.

use proptest::prelude::*;

use loadplan::{ConsolidationSession, Location, Order, StopId, StopType};
use loadplan::{EquipmentType, FreightMode};

use crate::strategies::ltl_orders;

fn build(orders: Vec<Order>) -> ConsolidationSession {
    let session = ConsolidationSession::new("SHIP-PROP");
    for order in orders {
        session.add_order(order).expect("distinct dry-van LTL orders are compatible");
    }
    session
}

fn route_ids(session: &ConsolidationSession) -> Vec<StopId> {
    session.snapshot().stops.iter().map(|s| s.id.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An order with docks nobody else uses goes to the end of the
    /// route and leaves the existing stops where they were.
    #[test]
    fn property_unrelated_order_appends(orders in ltl_orders(5, 8)) {
        let session = build(orders);
        let before = route_ids(&session);

        let outsider = Order::new(
            "Z99",
            Location::new("1 Far Rd", "Elsewhere", "NM", "87001"),
            Location::new("2 Far Rd", "Nowhere", "NM", "87002"),
            EquipmentType::DryVan,
            FreightMode::Ltl,
            500.0,
            1,
        )
        .expect("valid order");
        let after = session.add_order(outsider).expect("compatible order");

        prop_assert_eq!(after.stops.len(), before.len() + 2);
        let ids: Vec<StopId> = after.stops.iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(&ids[..before.len()], &before[..]);
        prop_assert_eq!(after.stops[before.len()].stop_type, StopType::Pickup);
        prop_assert_eq!(after.stops[before.len() + 1].stop_type, StopType::Delivery);
    }

    /// PROPERTY: Removing an order keeps the surviving stops in order.
    #[test]
    fn property_removal_preserves_relative_order(
        (orders, victim) in ltl_orders(5, 8)
            .prop_filter("need an order", |o| !o.is_empty())
            .prop_flat_map(|orders| {
                let len = orders.len();
                (Just(orders), 0..len)
            })
    ) {
        let victim_id = orders[victim].id.clone();
        let session = build(orders);
        let before = route_ids(&session);

        let after = session.remove_order(&victim_id).expect("order is planned");

        let ids: Vec<StopId> = after.stops.iter().map(|s| s.id.clone()).collect();
        let survivors: Vec<StopId> = before.into_iter().filter(|id| ids.contains(id)).collect();
        prop_assert_eq!(ids, survivors);
    }

    /// PROPERTY: An accepted move puts the stop exactly where asked and shifts
    /// nothing else out of relative order; a refused move changes nothing.
    #[test]
    fn property_move_is_exact_or_refused(
        orders in ltl_orders(5, 8),
        from in 0..20usize,
        to in 0..20usize,
    ) {
        let session = build(orders);
        let before = session.snapshot();

        match session.reorder_stops(from, to) {
            Ok(after) => {
                prop_assert_eq!(&after.stops[to].id, &before.stops[from].id);
                let mut expected: Vec<StopId> = before.stops.iter().map(|s| s.id.clone()).collect();
                let moved = expected.remove(from);
                expected.insert(to, moved);
                let ids: Vec<StopId> = after.stops.iter().map(|s| s.id.clone()).collect();
                prop_assert_eq!(ids, expected);
            }
            Err(_) => {
                prop_assert_eq!(session.snapshot().stops.clone(), before.stops.clone());
                prop_assert_eq!(session.version(), before.version);
            }
        }
    }
}
