//! loadplan CLI - shipment consolidation and stop sequencing
//!
//! Usage: loadplan [--catalog PATH] [--json] [-v] <COMMAND>
//!
//! Commands:
//!   orders  List the orders in the catalog
//!   check   Check which candidate orders could join a shipment
//!   plan    Build a shipment, apply stop moves, optionally save it

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::CommandContext;
use loadplan::config::{Config, Verbosity};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (mut config, notices) = Config::discover(Some(&cwd));
    if let Some(catalog) = cli.catalog {
        config.catalog.path = Some(catalog);
    }
    if cli.json {
        config.output.json = true;
    }
    config.output.verbosity = config.output.verbosity.raised(cli.verbose);

    init_tracing(config.output.verbosity);
    for notice in &notices {
        tracing::warn!("{}", notice);
    }

    let ctx = CommandContext::new(config);
    match cli.command {
        Commands::Orders => commands::orders::cmd_orders(&ctx),
        Commands::Check { base, candidates } => commands::check::cmd_check(&ctx, &base, &candidates),
        Commands::Plan {
            orders,
            moves,
            save,
            shipment_id,
        } => commands::plan::cmd_plan(&ctx, &orders, &moves, save.as_deref(), shipment_id),
    }
}

/// Diagnostics go to stderr; `LOADPLAN_LOG` overrides the verbosity filter
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env("LOADPLAN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
