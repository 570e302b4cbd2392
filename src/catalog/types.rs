//! Material catalog records.
//!
//! These types deserialize from both the TOML catalog shipped with the
//! binary and the JSON catalog files used by the dashboard.

use serde::{Deserialize, Serialize};

/// Nozzle/bed fallback for materials that do not declare temperatures.
pub const DEFAULT_TEMPERATURES: Temperatures = Temperatures {
    nozzle: 210,
    bed: 60,
};

/// A printable material as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Stable identifier, unique within a catalog (e.g. "pla")
    pub id: String,
    /// Display label
    pub name: String,
    /// Price per kilogram; must be positive
    #[serde(alias = "pricePerKg", alias = "price")]
    pub price_per_kg: f64,
    /// Scores used by material recommendation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<MaterialProperties>,
    /// Informational only, never used by cost or time math
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperatures: Option<Temperatures>,
    /// Density in g/cm³
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub characteristics: Vec<String>,
}

/// Property scores on a 0-10 scale. Missing scores never satisfy a requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    #[serde(default)]
    pub strength: Option<f64>,
    #[serde(default)]
    pub flexibility: Option<f64>,
    // Catalogs in the wild use both spellings.
    #[serde(default, alias = "heatResistance")]
    pub heat_resistance: Option<f64>,
    #[serde(default)]
    pub durability: Option<f64>,
}

/// Recommended print temperatures in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperatures {
    pub nozzle: u16,
    pub bed: u16,
}
