//! Location value object
//!
//! A normalized physical place. Two locations are the same stop when their
//! address line, city, state and postal code match case-insensitively;
//! `LocationKey` is the canonical form of that relation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinates (informational, never used for stop equality)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A physical pickup or delivery place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    pub fn new(
        address_line: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            address_line: address_line.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates {
            latitude,
            longitude,
        });
        self
    }

    /// Canonical key used to decide whether two locations are the same stop
    pub fn key(&self) -> LocationKey {
        LocationKey::of(self)
    }

    /// Returns true if both locations denote the same physical stop
    pub fn same_place(&self, other: &Location) -> bool {
        self.key() == other.key()
    }

    /// Name of the first blank address component, if any
    pub fn missing_component(&self) -> Option<&'static str> {
        [
            ("address_line", &self.address_line),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.address_line.trim(),
            self.city.trim(),
            self.state.trim(),
            self.postal_code.trim()
        )
    }
}

/// Case-insensitive identity of a location
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    fn of(location: &Location) -> Self {
        let parts = [
            &location.address_line,
            &location.city,
            &location.state,
            &location.postal_code,
        ];
        let key = parts
            .iter()
            .map(|part| part.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("|");
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
