//! Configuration module for loadplan
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LOADPLAN_*)
//! 3. Project config (./loadplan.toml)
//! 4. User config (~/.config/loadplan/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{CatalogConfig, Config, OutputConfig, PlanningConfig, Verbosity};
