//! Check command handler
//!
//! Speculative compatibility check: builds a shipment from the base orders
//! and reports whether each candidate could join it. Nothing is saved.

use anyhow::Result;

use loadplan::presentation::{factory, PreviewView};

use super::{order_ids, CommandContext};

pub fn cmd_check(ctx: &CommandContext, base: &[String], candidates: &[String]) -> Result<()> {
    let use_case = factory::create_planning_use_case(&ctx.config, false)?;
    let outcome = use_case.preview(&order_ids(base), &order_ids(candidates))?;

    if ctx.json() {
        let verdicts: Vec<serde_json::Value> = outcome
            .candidates
            .iter()
            .map(|c| match c.verdict.rejection() {
                None => serde_json::json!({
                    "order_id": c.order_id,
                    "compatible": true,
                }),
                Some(rejection) => serde_json::json!({
                    "order_id": c.order_id,
                    "compatible": false,
                    "code": rejection.code(),
                    "reason": rejection.to_string(),
                }),
            })
            .collect();
        let out = serde_json::json!({
            "type": "check",
            "base": outcome.base.order_ids(),
            "candidates": verdicts,
        });
        println!("{}", out);
        return Ok(());
    }

    print!("{}", PreviewView::new(&outcome).render());
    Ok(())
}
