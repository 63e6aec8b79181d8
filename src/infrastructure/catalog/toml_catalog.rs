//! TOML Order Catalog
//!
//! Implements the OrderCatalog port over a TOML file of `[[orders]]` tables:
//!
//! ```toml
//! [[orders]]
//! id = "ORD-1001"
//! equipment_type = "dry-van"
//! mode = "LTL"
//! weight = 8500.0
//! pallet_count = 6
//!
//! [orders.origin]
//! address_line = "1200 Harbor Blvd"
//! city = "Los Angeles"
//! state = "CA"
//! postal_code = "90021"
//!
//! [orders.destination]
//! address_line = "455 Desert Way"
//! city = "Phoenix"
//! state = "AZ"
//! postal_code = "85004"
//! ```
//!
//! Every record is validated on load; a catalog with a bad record is not
//! loaded at all.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::Order;
use crate::domain::ports::{CatalogError, CatalogResult, OrderCatalog};
use crate::domain::value_objects::OrderId;
use crate::error::{LoadplanError, LoadplanResult};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    orders: Vec<Order>,
}

/// File-backed order catalog
#[derive(Debug, Clone)]
pub struct TomlOrderCatalog {
    path: PathBuf,
    orders: Vec<Order>,
}

impl TomlOrderCatalog {
    /// Load and validate a catalog file
    pub fn load(path: &Path) -> LoadplanResult<Self> {
        if !path.exists() {
            return Err(LoadplanError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse catalog content; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> LoadplanResult<Self> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for order in &file.orders {
            order
                .validate()
                .map_err(|source| LoadplanError::InvalidOrder {
                    file: path.to_path_buf(),
                    source,
                })?;
            if !seen.insert(order.id.clone()) {
                return Err(LoadplanError::DuplicateOrderId {
                    id: order.id.clone(),
                    file: path.to_path_buf(),
                });
            }
        }

        tracing::debug!(path = %path.display(), orders = file.orders.len(), "order catalog loaded");
        Ok(Self {
            path: path.to_path_buf(),
            orders: file.orders,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderCatalog for TomlOrderCatalog {
    fn fetch_order(&self, id: &OrderId) -> CatalogResult<Order> {
        self.orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    fn list_orders(&self) -> CatalogResult<Vec<Order>> {
        Ok(self.orders.clone())
    }
}
