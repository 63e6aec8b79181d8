//! Stop Identifier Value Object
//!
//! Content-derived identity for a stop. The id is a SHA-256 digest of the
//! stop's location key and type, so re-deriving stops after an unrelated
//! order change leaves the identity of untouched stops intact.

use sha2::{Digest, Sha256};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LocationKey, OrderId, StopType};

/// Stable stop identifier (`stop:` followed by 16 hex chars)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Prefix for every stop id
    pub const PREFIX: &'static str = "stop:";

    /// Number of hex digits kept from the digest
    const HEX_LEN: usize = 16;

    /// Derive the id of a shared stop at `key`
    pub fn shared(key: &LocationKey, stop_type: StopType) -> Self {
        Self::digest(&[stop_type.as_str(), key.as_str()])
    }

    /// Derive the id of a stop owned by a single order.
    ///
    /// Full-truckload stops hash their owner in, so they can never collide
    /// with a shared stop at the same place.
    pub fn exclusive(key: &LocationKey, stop_type: StopType, owner: &OrderId) -> Self {
        Self::digest(&[stop_type.as_str(), key.as_str(), "exclusive", owner.as_str()])
    }

    fn digest(parts: &[&str]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.as_bytes());
            // unit separator keeps ("ab","c") and ("a","bc") apart
            hasher.update([0x1f_u8]);
        }
        let hex = format!("{:x}", hasher.finalize());
        Self(format!("{}{}", Self::PREFIX, &hex[..Self::HEX_LEN]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
