//! Stop derivation service
//!
//! Turns a set of orders into the set of stops that must be visited.
//! Orders whose pickups (or deliveries) share a location key are served by a
//! single stop; full-truckload orders always get stops of their own.

use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::{Order, Stop};
use crate::domain::value_objects::{OrderId, StopId, StopType};

pub struct StopDeriver;

impl StopDeriver {
    /// Derive the unsequenced stop set for `orders`.
    ///
    /// The result depends only on the set of orders, never on their input
    /// order, and is returned sorted by stop id.
    pub fn derive(orders: &[Order]) -> Vec<Stop> {
        let mut stops: BTreeMap<StopId, Stop> = BTreeMap::new();

        for order in orders {
            for leg in [StopType::Pickup, StopType::Delivery] {
                let location = order.location_for(leg);
                let key = location.key();
                let id = if order.is_exclusive() {
                    StopId::exclusive(&key, leg, &order.id)
                } else {
                    StopId::shared(&key, leg)
                };

                let stop = stops
                    .entry(id.clone())
                    .or_insert_with(|| Stop::new(id, leg, location.clone()));

                // Display the address as written on the lowest order id so the
                // representative does not depend on input order.
                let represents = stop
                    .linked_order_ids
                    .first()
                    .map_or(true, |first| order.id < *first);
                if represents {
                    stop.location = location.clone();
                }
                stop.linked_order_ids.insert(order.id.clone());
            }
        }

        let by_id: HashMap<&OrderId, &Order> = orders.iter().map(|o| (&o.id, o)).collect();
        stops
            .into_values()
            .map(|mut stop| {
                let (weight, pallets) = stop
                    .linked_order_ids
                    .iter()
                    .filter_map(|id| by_id.get(id))
                    .fold((0.0, 0), |(w, p), o| (w + o.weight, p + o.pallet_count));
                stop.total_weight = weight;
                stop.total_pallets = pallets;
                stop
            })
            .collect()
    }
}
