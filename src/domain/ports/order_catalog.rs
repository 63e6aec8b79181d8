//! OrderCatalog port - read-only access to order records
//!
//! The engine never calls the catalog itself. Callers resolve order ids
//! through it and hand complete `Order` values to the session.

use thiserror::Error;

use crate::domain::entities::Order;
use crate::domain::value_objects::OrderId;

/// Result type for catalog lookups
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("order {0} not found in catalog")]
    NotFound(OrderId),

    #[error("order catalog unavailable: {0}")]
    Unavailable(String),
}

/// Abstract source of order records
pub trait OrderCatalog: Send + Sync {
    /// Fetch the full record for `id`
    fn fetch_order(&self, id: &OrderId) -> CatalogResult<Order>;

    /// All orders the catalog knows, in catalog order
    fn list_orders(&self) -> CatalogResult<Vec<Order>>;

    /// Fetch several orders, failing on the first miss
    fn fetch_all(&self, ids: &[OrderId]) -> CatalogResult<Vec<Order>> {
        ids.iter().map(|id| self.fetch_order(id)).collect()
    }
}
