//! Shared generators: small location pools so orders collide on stops.

use proptest::prelude::*;

use loadplan::{EquipmentType, FreightMode, Location, Order};

/// One of a handful of docks; equal index means equal location
pub fn dock(index: usize) -> Location {
    Location::new(
        format!("{} Terminal Way", index * 10 + 1),
        format!("Dock{}", index),
        "TX",
        format!("75{:03}", index),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct OrderShape {
    pub id: usize,
    pub from: usize,
    pub to: usize,
    pub reefer: bool,
    pub ftl: bool,
}

impl OrderShape {
    pub fn build(&self) -> Order {
        Order::new(
            format!("O{:02}", self.id),
            dock(self.from),
            dock(self.to),
            if self.reefer {
                EquipmentType::Reefer
            } else {
                EquipmentType::DryVan
            },
            if self.ftl {
                FreightMode::Ftl
            } else {
                FreightMode::Ltl
            },
            250.0 * (self.id + 1) as f64,
            (self.id % 4) as u32 + 1,
        )
        .expect("generated order is valid")
    }
}

/// Dry-van LTL orders over `docks` locations
pub fn ltl_shape(docks: usize) -> impl Strategy<Value = OrderShape> {
    (0..16usize, 0..docks, 0..docks)
        .prop_filter("distinct ends", |(_, from, to)| from != to)
        .prop_map(|(id, from, to)| OrderShape {
            id,
            from,
            to,
            reefer: false,
            ftl: false,
        })
}

/// Any order: mostly dry-van LTL, sometimes reefer or FTL
pub fn any_shape(docks: usize) -> impl Strategy<Value = OrderShape> {
    (ltl_shape(docks), prop::bool::weighted(0.1), prop::bool::weighted(0.1)).prop_map(
        |(shape, reefer, ftl)| OrderShape { reefer, ftl, ..shape },
    )
}

/// Distinct-id LTL orders
pub fn ltl_orders(docks: usize, max: usize) -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(ltl_shape(docks), 0..=max).prop_map(|shapes| {
        let mut seen = std::collections::HashSet::new();
        shapes
            .into_iter()
            .filter(|s| seen.insert(s.id))
            .map(|s| s.build())
            .collect()
    })
}
