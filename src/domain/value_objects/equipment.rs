//! Equipment and freight mode value objects
//!
//! - `EquipmentType`: trailer class an order must travel in
//! - `FreightMode`: whether the order buys the whole trailer (FTL) or shares it (LTL)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trailer equipment class required by an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentType {
    #[serde(alias = "dry van", alias = "dryvan")]
    DryVan,
    Reefer,
    Flatbed,
    #[serde(alias = "step deck", alias = "stepdeck")]
    StepDeck,
    Conestoga,
    #[serde(alias = "power only", alias = "poweronly")]
    PowerOnly,
}

impl EquipmentType {
    pub const ALL: [EquipmentType; 6] = [
        EquipmentType::DryVan,
        EquipmentType::Reefer,
        EquipmentType::Flatbed,
        EquipmentType::StepDeck,
        EquipmentType::Conestoga,
        EquipmentType::PowerOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::DryVan => "dry-van",
            EquipmentType::Reefer => "reefer",
            EquipmentType::Flatbed => "flatbed",
            EquipmentType::StepDeck => "step-deck",
            EquipmentType::Conestoga => "conestoga",
            EquipmentType::PowerOnly => "power-only",
        }
    }

    /// Human label as dispatchers write it ("Dry Van")
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::DryVan => "Dry Van",
            EquipmentType::Reefer => "Reefer",
            EquipmentType::Flatbed => "Flatbed",
            EquipmentType::StepDeck => "Step Deck",
            EquipmentType::Conestoga => "Conestoga",
            EquipmentType::PowerOnly => "Power Only",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EquipmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "dryvan" | "van" => Ok(EquipmentType::DryVan),
            "reefer" | "refrigerated" => Ok(EquipmentType::Reefer),
            "flatbed" => Ok(EquipmentType::Flatbed),
            "stepdeck" => Ok(EquipmentType::StepDeck),
            "conestoga" => Ok(EquipmentType::Conestoga),
            "poweronly" => Ok(EquipmentType::PowerOnly),
            _ => Err(format!(
                "unknown equipment type '{}' (expected one of: {})",
                s,
                EquipmentType::ALL
                    .iter()
                    .map(|e| e.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// Freight mode of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FreightMode {
    /// Full truckload: the order occupies the entire trailer
    #[serde(rename = "FTL", alias = "ftl")]
    Ftl,
    /// Less than truckload: the order may share trailer space and stops
    #[serde(rename = "LTL", alias = "ltl")]
    Ltl,
}

impl FreightMode {
    pub fn is_ftl(&self) -> bool {
        matches!(self, FreightMode::Ftl)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FreightMode::Ftl => "FTL",
            FreightMode::Ltl => "LTL",
        }
    }
}

impl fmt::Display for FreightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FreightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ftl" | "full" | "full-truckload" => Ok(FreightMode::Ftl),
            "ltl" | "partial" | "less-than-truckload" => Ok(FreightMode::Ltl),
            _ => Err(format!("unknown freight mode '{}' (expected FTL or LTL)", s)),
        }
    }
}
