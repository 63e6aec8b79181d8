#![no_main]

use libfuzzer_sys::fuzz_target;
use loadplan::domain::services::Invariants;
use loadplan::{ConsolidationSession, EquipmentType, FreightMode, Location, Order, OrderId};

const CITIES: [&str; 4] = ["Austin", "Dallas", "Houston", "Waco"];

fuzz_target!(|data: &[u8]| {
    // Each byte pair is one edit; the published snapshot must always be consistent
    let session = ConsolidationSession::new("fuzz");
    for (i, pair) in data.chunks(2).enumerate() {
        let a = pair[0];
        let b = pair.get(1).copied().unwrap_or(0);
        match a % 4 {
            0 | 1 => {
                let from = CITIES[(b % 4) as usize];
                let to = CITIES[((b / 4) % 4) as usize];
                let mode = if b & 0x40 != 0 { FreightMode::Ftl } else { FreightMode::Ltl };
                if let Ok(order) = Order::new(
                    format!("O{}", i),
                    Location::new("1 Main St", from, "TX", "75000"),
                    Location::new("1 Main St", to, "TX", "75000"),
                    EquipmentType::DryVan,
                    mode,
                    100.0,
                    1,
                ) {
                    let _ = session.add_order(order);
                }
            }
            2 => {
                let _ = session.remove_order(&OrderId::new(format!("O{}", b as usize % (i + 1))));
            }
            _ => {
                let _ = session.reorder_stops((b % 8) as usize, (b / 8 % 8) as usize);
            }
        }
        let snap = session.snapshot();
        assert!(Invariants::check(&snap.orders, &snap.stops).is_ok());
    }
});
