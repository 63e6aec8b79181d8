//! Stop type value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a stop loads or unloads freight.
///
/// `Pickup` sorts before `Delivery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Pickup,
    Delivery,
}

impl StopType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopType::Pickup => "pickup",
            StopType::Delivery => "delivery",
        }
    }

    /// The other leg of an order.
    pub fn counterpart(&self) -> StopType {
        match self {
            StopType::Pickup => StopType::Delivery,
            StopType::Delivery => StopType::Pickup,
        }
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self, StopType::Pickup)
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
