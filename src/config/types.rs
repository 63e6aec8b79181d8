//! Configuration type definitions

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LoadplanResult;

use super::loader::{self, ConfigWarning};

/// Order catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// TOML file of `[[orders]]`; relative paths resolve against the config file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Emit NDJSON events and JSON results instead of text
    #[serde(default)]
    pub json: bool,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }

    /// Raise the level by `count` steps (one per `-v`)
    pub fn raised(self, count: u8) -> Self {
        match (self, count) {
            (level, 0) => level,
            (Verbosity::Quiet, 1) | (Verbosity::Normal, 1) => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Planning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Prefix of generated shipment ids
    #[serde(default = "default_shipment_prefix")]
    pub shipment_prefix: String,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            shipment_prefix: default_shipment_prefix(),
        }
    }
}

fn default_shipment_prefix() -> String {
    "SHIP".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub planning: PlanningConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LoadplanResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LoadplanResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Load like `load_or_default`, returning warnings for the caller to report
    pub fn discover(project_root: Option<&Path>) -> (Self, Vec<String>) {
        loader::discover(project_root)
    }

    /// Apply environment variable overrides (LOADPLAN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Generated shipment id for a plan started at `at`
    pub fn shipment_id_at(&self, at: DateTime<Utc>) -> String {
        format!(
            "{}-{}",
            self.planning.shipment_prefix,
            at.format("%Y%m%d-%H%M%S")
        )
    }
}
