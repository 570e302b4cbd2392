//! Type definitions for the cost and production estimator.
//!
//! Inputs deserialize from JSON/TOML callers; outputs serialize for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{MaterialProperties, Temperatures};

/// Markup applied when the caller does not give one (200% over loaded cost).
pub const DEFAULT_MARKUP_PERCENT: f64 = 200.0;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Print fidelity setting. Ordered from fastest to slowest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Draft,
    #[default]
    Standard,
    High,
    Ultra,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Draft,
        QualityTier::Standard,
        QualityTier::High,
        QualityTier::Ultra,
    ];

    /// Parse a tier name case-insensitively.
    ///
    /// Tier is advisory, so unrecognized input falls back to `Standard`
    /// instead of failing.
    pub fn parse(input: &str) -> QualityTier {
        match input.trim().to_lowercase().as_str() {
            "draft" => QualityTier::Draft,
            "standard" => QualityTier::Standard,
            "high" => QualityTier::High,
            "ultra" => QualityTier::Ultra,
            _ => QualityTier::Standard,
        }
    }

    /// Print-time multiplier relative to standard quality.
    pub fn time_multiplier(self) -> f64 {
        match self {
            QualityTier::Draft => 0.7,
            QualityTier::Standard => 1.0,
            QualityTier::High => 1.5,
            QualityTier::Ultra => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::Draft => "draft",
            QualityTier::Standard => "standard",
            QualityTier::High => "high",
            QualityTier::Ultra => "ultra",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A print job as described by the caller. Never stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobParameters {
    /// Object mass in grams
    pub mass_grams: f64,
    /// Wall-clock print time; `None` means "estimate it"
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub quality: QualityTier,
    #[serde(default = "default_markup")]
    pub markup_percent: f64,
}

fn default_markup() -> f64 {
    DEFAULT_MARKUP_PERCENT
}

impl JobParameters {
    /// A job of the given mass with every other field at its default.
    pub fn new(mass_grams: f64) -> Self {
        Self {
            mass_grams,
            duration_hours: None,
            quality: QualityTier::default(),
            markup_percent: DEFAULT_MARKUP_PERCENT,
        }
    }

    pub fn with_duration(mut self, hours: f64) -> Self {
        self.duration_hours = Some(hours);
        self
    }

    pub fn with_quality(mut self, quality: QualityTier) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_markup(mut self, percent: f64) -> Self {
        self.markup_percent = percent;
        self
    }
}

/// Desired material properties. Absent fields neither help nor penalize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub strength: Option<f64>,
    #[serde(default)]
    pub flexibility: Option<f64>,
    #[serde(default, alias = "heatResistance")]
    pub heat_resistance: Option<f64>,
    #[serde(default)]
    pub durability: Option<f64>,
    /// Maximum acceptable price per kg
    #[serde(default)]
    pub budget: Option<f64>,
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Cost and price of a job, in whole currency units.
///
/// Every field is rounded once, from unrounded intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: i64,
    pub electricity_cost: i64,
    pub amortization_cost: i64,
    pub labor_cost: i64,
    /// Sum of the four components, before failure loading
    pub raw_cost: i64,
    /// Total cost before markup (the loaded cost): raw cost plus the
    /// failure surcharge
    #[serde(alias = "total_cost_before_markup", alias = "totalCostBeforeMarkup")]
    pub total_cost: i64,
    pub final_price: i64,
    pub profit: i64,
    pub markup_amount: i64,
}

/// Estimated print time for a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationEstimate {
    /// Total minutes, rounded for display
    pub total_minutes: u64,
    /// Whole hours of the rounded total
    pub hours: u64,
    /// Remaining minutes of the rounded total (0-59)
    pub minutes: u64,
    /// Unrounded minutes
    pub total_minutes_exact: f64,
    /// Unrounded hours, suitable for `compute_cost`
    pub fractional_hours: f64,
    /// Name of the material the rate was taken from, if one resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl DurationEstimate {
    pub fn zero() -> Self {
        Self {
            total_minutes: 0,
            hours: 0,
            minutes: 0,
            total_minutes_exact: 0.0,
            fractional_hours: 0.0,
            material: None,
        }
    }
}

impl fmt::Display for DurationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ч {}м", self.hours, self.minutes)
    }
}

/// The best-matching material for a set of requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub material_id: String,
    pub material_name: String,
    pub score: u32,
    /// Copy of the material's scores (all absent if it declares none)
    pub properties: MaterialProperties,
    /// Price per kg
    pub price: f64,
}

/// A complete price quote for one job on one material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub material_id: String,
    pub material_name: String,
    pub temperatures: Temperatures,
    pub quality: QualityTier,
    pub markup_percent: f64,
    /// Hours fed into the cost computation
    pub duration_hours: f64,
    /// Present when the duration was estimated rather than supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<DurationEstimate>,
    pub cost: CostBreakdown,
    /// Margin over loaded cost, in percent
    pub profitability_percent: Option<f64>,
}
