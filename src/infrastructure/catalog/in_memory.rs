//! In-memory order catalog

use crate::domain::entities::Order;
use crate::domain::ports::{CatalogError, CatalogResult, OrderCatalog};
use crate::domain::value_objects::OrderId;

/// Catalog over a fixed list of orders, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderCatalog {
    orders: Vec<Order>,
}

impl InMemoryOrderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Add an order, replacing any existing record with the same id
    pub fn insert(&mut self, order: Order) {
        match self.orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order,
            None => self.orders.push(order),
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderCatalog for InMemoryOrderCatalog {
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
