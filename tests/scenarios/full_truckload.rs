//! Scenario: Full-Truckload Shipment
//!
//! Journey: Dispatcher books a full-truckload order, then tries to top the
//! truck up with another order.
//!
//! Steps:
//! 1. Dispatcher adds an FTL order from X to Y
//! 2. Shipment shows exactly one pickup and one delivery
//! 3. Dispatcher tries to add a second order
//! 4. The second order is refused and the shipment is untouched
//!
//! Success Criteria:
//! - Pickup at X is first, delivery at Y is second
//! - The refusal names the exclusivity rule
//! - Version does not move on refusal

use loadplan::application::ShipmentType;
use loadplan::{ConsolidationSession, FreightMode, OrderId, Rejection, SessionError, StopType};

use crate::common::*;

/// SCENARIO: FTL order alone gets a two-stop route
#[test]
fn scenario_single_ftl_order_gets_two_stops() {
    let session = ConsolidationSession::new("SHIP-FTL");

    let snapshot = session
        .add_order(ftl("o1", "Fresno", "Oakland"))
        .expect("FTL order into empty shipment");

    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.stops.len(), 2);
    assert_eq!(route(&snapshot.stops), vec!["P:Fresno", "D:Oakland"]);

    let pickup = &snapshot.stops[0];
    assert_eq!(pickup.stop_type, StopType::Pickup);
    assert_eq!(pickup.sequence_index, Some(0));
    assert_eq!(pickup.linked_order_ids, ids(&["o1"]));

    let delivery = &snapshot.stops[1];
    assert_eq!(delivery.stop_type, StopType::Delivery);
    assert_eq!(delivery.sequence_index, Some(1));

    assert_eq!(snapshot.shipment_type(), Some(ShipmentType::Ftl));
    assert_consistent(&snapshot);
}

/// SCENARIO: Nothing can join an FTL shipment
#[test]
fn scenario_second_order_is_refused_on_ftl_shipment() {
    let session = ConsolidationSession::new("SHIP-FTL");
    let before = session
        .add_order(ftl("o1", "Fresno", "Oakland"))
        .expect("FTL order into empty shipment");

    // Same equipment, same lanes - still refused
    let err = session
        .add_order(ltl("o2", "Fresno", "Oakland"))
        .expect_err("FTL shipment must stay exclusive");

    assert_eq!(
        err,
        SessionError::Rejected(Rejection::FtlExclusivityViolation {
            candidate: "o2".into(),
            mode: FreightMode::Ltl,
        })
    );

    let after = session.snapshot();
    assert_eq!(after.version, before.version);
    assert_eq!(after.stops, before.stops);
    assert_eq!(after.order_ids(), vec![OrderId::from("o1")]);
}

/// SCENARIO: An FTL order cannot join an LTL shipment either
#[test]
fn scenario_ftl_order_refused_on_ltl_shipment() {
    let session = ConsolidationSession::new("SHIP-LTL");
    session
        .add_order(ltl("o1", "Fresno", "Oakland"))
        .expect("LTL order into empty shipment");

    let err = session
        .add_order(ftl("o2", "Merced", "Stockton"))
        .expect_err("FTL order cannot be consolidated");

    assert_eq!(err.rejection().map(Rejection::code), Some("ftl_exclusivity_violation"));
    assert_eq!(session.version(), 1);
}

/// SCENARIO: Removing the FTL order frees the truck
#[test]
fn scenario_removing_ftl_order_reopens_shipment() {
    let session = ConsolidationSession::new("SHIP-FTL");
    session
        .add_order(ftl("o1", "Fresno", "Oakland"))
        .expect("FTL order into empty shipment");

    let emptied = session.remove_order(&"o1".into()).expect("remove FTL order");
    assert!(emptied.stops.is_empty());
    assert_eq!(emptied.version, 2);

    let refilled = session
        .add_order(ltl("o2", "Fresno", "Oakland"))
        .expect("shipment is open again");
    assert_eq!(refilled.shipment_type(), Some(ShipmentType::Ltl));
    assert_consistent(&refilled);
}
