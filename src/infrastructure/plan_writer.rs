//! JSON Plan Writer
//!
//! Persists finalized shipment plans as pretty-printed JSON. Writes go to a
//! temporary file in the target directory which is then renamed over the
//! destination, so readers never see a partial plan.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::application::ShipmentPlan;
use crate::error::LoadplanResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPlanWriter;

impl JsonPlanWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `plan` to `path`, creating parent directories as needed
    pub fn write(&self, plan: &ShipmentPlan, path: &Path) -> LoadplanResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut tmp, plan)?;
        writeln!(tmp)?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;

        tracing::info!(path = %path.display(), shipment = %plan.shipment_id, "plan saved");
        Ok(())
    }

    pub fn read(&self, path: &Path) -> LoadplanResult<ShipmentPlan> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
