use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

/// loadplan - consolidate freight orders into shipments and sequence their stops
#[derive(Parser, Debug)]
#[command(name = "loadplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Order catalog file (overrides config and LOADPLAN_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format for automation
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the orders in the catalog
    Orders,

    /// Check which candidate orders could join a shipment
    Check {
        /// Orders already in the shipment (repeatable or comma-separated)
        #[arg(long = "with", value_name = "ID", value_delimiter = ',')]
        base: Vec<String>,

        /// Candidate orders to evaluate
        #[arg(value_name = "CANDIDATE", required = true)]
        candidates: Vec<String>,
    },

    /// Build a shipment from orders, then apply stop moves
    Plan {
        /// Orders to admit, in this order
        #[arg(value_name = "ID", required = true)]
        orders: Vec<String>,

        /// Move the stop at FROM to position TO (repeatable)
        #[arg(long = "move", value_name = "FROM:TO")]
        moves: Vec<StopMove>,

        /// Save the finalized plan as JSON
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,

        /// Shipment id (generated from the configured prefix if omitted)
        #[arg(long)]
        shipment_id: Option<String>,
    },
}

/// `FROM:TO` stop move argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopMove {
    pub from: usize,
    pub to: usize,
}

impl FromStr for StopMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("'{}' is not a stop position", part))
        };
        Ok(Self {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}
