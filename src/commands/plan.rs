//! Plan command handler
//!
//! Admits orders into a new shipment one at a time, applies manual stop
//! moves, prints the result and optionally saves the finalized plan.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use loadplan::application::PlanRequest;
use loadplan::infrastructure::JsonPlanWriter;
use loadplan::presentation::{factory, PlanView};

use crate::cli::StopMove;

use super::{order_ids, CommandContext, EXIT_REJECTED};

pub fn cmd_plan(
    ctx: &CommandContext,
    orders: &[String],
    moves: &[StopMove],
    save: Option<&Path>,
    shipment_id: Option<String>,
) -> Result<()> {
    let json = ctx.json();
    let use_case = factory::create_planning_use_case(&ctx.config, json)?;

    let shipment_id = shipment_id.unwrap_or_else(|| ctx.config.shipment_id_at(Utc::now()));
    let mut request = PlanRequest::new(shipment_id);
    request.order_ids = order_ids(orders);
    request.moves = moves.iter().map(|m| (m.from, m.to)).collect();

    let outcome = use_case.run(&request);
    if outcome.has_internal_error() {
        anyhow::bail!("planning aborted: the engine produced an inconsistent shipment");
    }

    let saved = match save {
        Some(path) => {
            let plan = outcome.snapshot.finalize()?;
            JsonPlanWriter::new().write(&plan, path)?;
            Some(path)
        }
        None => None,
    };

    if json {
        let out = serde_json::json!({
            "type": "plan",
            "status": if outcome.rejected_count() == 0 { "success" } else { "partial" },
            "rejected": outcome.rejected_count(),
            "saved": saved.map(|p| p.display().to_string()),
            "snapshot": &*outcome.snapshot,
        });
        println!("{}", out);
    } else {
        print!("{}", PlanView::new(&outcome.snapshot, &outcome.steps).render());
        if let Some(path) = saved {
            println!("\nSaved plan to {}", path.display());
        }
    }

    if outcome.rejected_count() > 0 {
        std::process::exit(EXIT_REJECTED);
    }
    Ok(())
}
