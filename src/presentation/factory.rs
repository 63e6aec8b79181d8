//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::PlanningUseCase;
use crate::config::Config;
use crate::error::LoadplanResult;
use crate::infrastructure::{JsonEventSink, TomlOrderCatalog};

/// Type alias for the concrete PlanningUseCase with all dependencies
pub type ConcretePlanningUseCase = PlanningUseCase<TomlOrderCatalog>;

/// Default catalog file when neither config nor flags name one
pub const DEFAULT_CATALOG_FILE: &str = "orders.toml";

/// Catalog path from config, falling back to `./orders.toml`
pub fn catalog_path(config: &Config) -> PathBuf {
    config
        .catalog
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
}

/// Load the configured catalog
pub fn load_catalog(config: &Config) -> LoadplanResult<TomlOrderCatalog> {
    TomlOrderCatalog::load(&catalog_path(config))
}

/// Create a planning use case over the configured catalog.
///
/// With `json` set, sessions stream NDJSON events to stdout.
pub fn create_planning_use_case(
    config: &Config,
    json: bool,
) -> LoadplanResult<ConcretePlanningUseCase> {
    let use_case = PlanningUseCase::new(load_catalog(config)?);
    if json {
        return Ok(use_case.with_events(Arc::new(JsonEventSink::stdout())));
    }
    Ok(use_case)
}
