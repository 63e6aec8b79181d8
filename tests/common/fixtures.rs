//! Test fixtures - order builders and catalog content.

use std::collections::BTreeSet;

use loadplan::{EquipmentType, FreightMode, Location, Order, OrderId};

/// A dock in `city`; same city means same stop
pub fn place(city: &str) -> Location {
    Location::new(format!("100 {} Dock Rd", city), city, "TX", "75001")
}

pub fn order(
    id: &str,
    from: &str,
    to: &str,
    equipment: EquipmentType,
    mode: FreightMode,
) -> Order {
    Order::new(id, place(from), place(to), equipment, mode, 1_000.0, 2)
        .expect("fixture order is valid")
}

pub fn ltl(id: &str, from: &str, to: &str) -> Order {
    order(id, from, to, EquipmentType::DryVan, FreightMode::Ltl)
}

pub fn ftl(id: &str, from: &str, to: &str) -> Order {
    order(id, from, to, EquipmentType::DryVan, FreightMode::Ftl)
}

/// Catalog used by CLI tests.
///
/// - ORD-1, ORD-2: dry van LTL sharing the Los Angeles pickup
/// - ORD-3: dry van LTL from Long Beach to Phoenix
/// - ORD-4: reefer LTL
/// - ORD-5: dry van FTL
pub const SAMPLE_CATALOG: &str = r#"
[[orders]]
id = "ORD-1"
equipment_type = "dry-van"
mode = "LTL"
weight = 8500.0
pallet_count = 6
customer = "Acme Retail"

[orders.origin]
address_line = "1200 Harbor Blvd"
city = "Los Angeles"
state = "CA"
postal_code = "90021"

[orders.destination]
address_line = "455 Desert Way"
city = "Phoenix"
state = "AZ"
postal_code = "85004"

[[orders]]
id = "ORD-2"
equipment_type = "dry-van"
mode = "LTL"
weight = 3200.0
pallet_count = 2

[orders.origin]
address_line = "1200 Harbor Blvd"
city = "Los Angeles"
state = "CA"
postal_code = "90021"

[orders.destination]
address_line = "80 Strip Ave"
city = "Las Vegas"
state = "NV"
postal_code = "89101"

[[orders]]
id = "ORD-3"
equipment_type = "dry-van"
mode = "LTL"
weight = 1500.0
pallet_count = 1

[orders.origin]
address_line = "9 Pier Rd"
city = "Long Beach"
state = "CA"
postal_code = "90802"

[orders.destination]
address_line = "455 Desert Way"
city = "Phoenix"
state = "AZ"
postal_code = "85004"

[[orders]]
id = "ORD-4"
equipment_type = "reefer"
mode = "LTL"
weight = 4000.0
pallet_count = 4

[orders.origin]
address_line = "1200 Harbor Blvd"
city = "Los Angeles"
state = "CA"
postal_code = "90021"

[orders.destination]
address_line = "455 Desert Way"
city = "Phoenix"
state = "AZ"
postal_code = "85004"

[[orders]]
id = "ORD-5"
equipment_type = "dry-van"
mode = "FTL"
weight = 42000.0
pallet_count = 26

[orders.origin]
address_line = "3 Rail Yard"
city = "Fresno"
state = "CA"
postal_code = "93701"

[orders.destination]
address_line = "77 Bay St"
city = "Oakland"
state = "CA"
postal_code = "94607"
"#;

/// Linked-order set as stored on a stop
pub fn ids(order_ids: &[&str]) -> BTreeSet<OrderId> {
    order_ids.iter().map(|id| OrderId::from(*id)).collect()
}
