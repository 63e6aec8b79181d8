//! Scenario: Dispatcher Plans From The Command Line
//!
//! Journey: Dispatcher keeps an order catalog next to a project config and
//! builds tomorrow's run with the CLI.
//!
//! Steps:
//! 1. Dispatcher lists the catalog
//! 2. Dispatcher checks which orders can ride together
//! 3. Dispatcher plans the compatible orders and saves the plan
//! 4. Saved plan carries the configured shipment prefix
//!
//! Success Criteria:
//! - Every command succeeds against the project catalog
//! - Saved plan is valid JSON with a precedence-valid route

use crate::common::*;

/// SCENARIO: List, check, plan, save
#[test]
fn scenario_dispatcher_builds_and_saves_a_run() {
    let env = TestEnv::builder()
        .with_catalog(SAMPLE_CATALOG)
        .with_project_config("[planning]\nshipment_prefix = \"LAX\"\n")
        .build();

    // 1. What is on the board?
    let listing = env.run(&["orders"]);
    assert!(listing.success, "orders failed: {}", listing.stderr);
    assert!(listing.stdout.contains("ORD-1"));
    assert!(listing.stdout.contains("ORD-5"));

    // 2. Which orders can join ORD-1?
    let check = env.run(&["check", "--with", "ORD-1", "ORD-2", "ORD-3", "ORD-4", "ORD-5"]);
    assert!(check.success, "check failed: {}", check.stderr);
    assert!(check.stdout.contains("✓ ORD-2: compatible"));
    assert!(check.stdout.contains("✓ ORD-3: compatible"));
    assert!(check.stdout.contains("✗ ORD-4"));
    assert!(check.stdout.contains("✗ ORD-5"));

    // 3. Plan the compatible ones and save
    let plan = env.run(&["plan", "ORD-1", "ORD-2", "ORD-3", "--save", "plans/run.json"]);
    assert!(
        plan.success,
        "plan failed.\nOutput: {}",
        plan.combined_output()
    );
    assert!(plan.stdout.contains("Orders 3 | Stops 4"));
    assert!(plan.stdout.contains("Saved plan to plans/run.json"));

    // 4. The saved plan is what downstream systems receive
    let saved: serde_json::Value =
        serde_json::from_str(&env.read_project_file("plans/run.json")).expect("saved plan is JSON");
    let shipment_id = saved["shipment_id"].as_str().expect("shipment_id");
    assert!(shipment_id.starts_with("LAX-"), "got {shipment_id}");
    assert_eq!(saved["shipment_type"], "LTL");
    assert_eq!(saved["equipment_type"], "dry-van");
    assert_eq!(saved["version"], 3);
    assert_eq!(saved["orders"], serde_json::json!(["ORD-1", "ORD-2", "ORD-3"]));

    let stops = saved["stops"].as_array().expect("stops");
    assert_eq!(stops.len(), 4);
    for (i, stop) in stops.iter().enumerate() {
        assert_eq!(stop["sequence_index"], i);
    }
    assert_eq!(stops[0]["stop_type"], "pickup");
    assert_eq!(stops[3]["stop_type"], "delivery");
}
