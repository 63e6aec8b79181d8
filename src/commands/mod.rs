//! Command handlers

pub mod check;
pub mod orders;
pub mod plan;

use loadplan::config::Config;
use loadplan::OrderId;

/// Exit status when any requested change was refused
pub const EXIT_REJECTED: i32 = 2;

/// Settings shared by every command after CLI, env and file layers merge
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn json(&self) -> bool {
        self.config.output.json
    }
}

pub fn order_ids(raw: &[String]) -> Vec<OrderId> {
    raw.iter().map(|s| OrderId::new(s.trim())).collect()
}
