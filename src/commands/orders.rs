//! Orders command handler
//!
//! Lists the orders available in the configured catalog.

use anyhow::Result;

use loadplan::domain::ports::OrderCatalog;
use loadplan::presentation::{factory, CatalogView};

use super::CommandContext;

pub fn cmd_orders(ctx: &CommandContext) -> Result<()> {
    let catalog = factory::load_catalog(&ctx.config)?;
    let orders = catalog.list_orders()?;

    if ctx.json() {
        let out = serde_json::json!({
            "type": "orders",
            "catalog": catalog.path().display().to_string(),
            "count": orders.len(),
            "orders": orders,
        });
        println!("{}", out);
        return Ok(());
    }

    print!("{}", CatalogView::new(&orders).render());
    Ok(())
}
