//! Plain-text views
//!
//! Each view renders to a `String` so commands decide where it goes and tests
//! can snapshot it.

use std::fmt::Write;

use crate::application::{PreviewOutcome, Snapshot, StepOutcome};
use crate::domain::entities::{Order, Stop};
use crate::domain::policies::Verdict;

const LOCATION_WIDTH: usize = 44;

/// A planned shipment with the steps that produced it
pub struct PlanView<'a> {
    snapshot: &'a Snapshot,
    steps: &'a [StepOutcome],
}

impl<'a> PlanView<'a> {
    pub fn new(snapshot: &'a Snapshot, steps: &'a [StepOutcome]) -> Self {
        Self { snapshot, steps }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        render_header(&mut out, self.snapshot);
        out.push('\n');
        render_stops(&mut out, &self.snapshot.stops);

        let refused: Vec<&StepOutcome> = self.steps.iter().filter(|s| !s.is_ok()).collect();
        if !refused.is_empty() {
            out.push('\n');
            let _ = writeln!(out, "Refused ({}):", refused.len());
            for step in refused {
                if let Err(failure) = &step.result {
                    let _ = writeln!(out, "  ✗ {}: {}", step.step, failure);
                }
            }
        }
        out
    }
}

/// Speculative verdicts for candidate orders
pub struct PreviewView<'a> {
    outcome: &'a PreviewOutcome,
}

impl<'a> PreviewView<'a> {
    pub fn new(outcome: &'a PreviewOutcome) -> Self {
        Self { outcome }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        render_header(&mut out, &self.outcome.base);
        out.push('\n');

        for candidate in &self.outcome.candidates {
            match &candidate.verdict {
                Verdict::Admit => {
                    let _ = writeln!(out, "  ✓ {}: compatible", candidate.order_id);
                }
                Verdict::Reject(rejection) => {
                    let _ = writeln!(out, "  ✗ {}: {}", candidate.order_id, rejection);
                }
            }
        }
        out
    }
}

/// Orders available in the catalog
pub struct CatalogView<'a> {
    orders: &'a [Order],
}

impl<'a> CatalogView<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self { orders }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.orders.is_empty() {
            out.push_str("No orders in catalog.\n");
            return out;
        }

        let _ = writeln!(
            out,
            "{:<12} {:<4} {:<11} {:>9} {:>4}  Route",
            "Order", "Mode", "Equipment", "Weight", "Plt"
        );
        for order in self.orders {
            let _ = writeln!(
                out,
                "{:<12} {:<4} {:<11} {:>9.1} {:>4}  {}, {} -> {}, {}",
                order.id.as_str(),
                order.mode.as_str(),
                order.equipment_type.label(),
                order.weight,
                order.pallet_count,
                order.origin.city.trim(),
                order.origin.state.trim(),
                order.destination.city.trim(),
                order.destination.state.trim(),
            );
        }
        out
    }
}

fn render_header(out: &mut String, snapshot: &Snapshot) {
    let _ = write!(out, "Shipment {}  v{}", snapshot.session_id, snapshot.version);
    if let (Some(kind), Some(equipment)) = (snapshot.shipment_type(), snapshot.equipment_type()) {
        let _ = write!(out, "  {}  {}", kind, equipment.label());
    }
    out.push('\n');

    let totals = snapshot.totals();
    let _ = writeln!(
        out,
        "Orders {} | Stops {} | Pallets {} | Weight {:.1} lb",
        totals.orders, totals.stops, totals.pallets, totals.weight
    );
}

fn render_stops(out: &mut String, stops: &[Stop]) {
    if stops.is_empty() {
        out.push_str("No orders planned.\n");
        return;
    }

    let _ = writeln!(
        out,
        "{:>3}  {:<8}  {:<width$}  Orders",
        "#",
        "Type",
        "Location",
        width = LOCATION_WIDTH
    );
    for (position, stop) in stops.iter().enumerate() {
        let orders: Vec<&str> = stop.linked_order_ids.iter().map(|id| id.as_str()).collect();
        let _ = writeln!(
            out,
            "{:>3}  {:<8}  {:<width$}  {}",
            position,
            stop.stop_type.as_str(),
            stop.location.to_string(),
            orders.join(", "),
            width = LOCATION_WIDTH
        );
    }
}
