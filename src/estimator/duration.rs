//! Print-time heuristic.
//!
//! Not physically derived: a per-gram rate, adjusted for a couple of
//! filaments known to print slower or faster, scaled by quality tier.

use crate::catalog::MaterialProfile;

use super::types::{DurationEstimate, QualityTier};

/// Minutes per gram at standard quality for most filaments.
pub const DEFAULT_MINUTES_PER_GRAM: f64 = 0.03;
/// Flexible filament (TPU) prints slower.
pub const FLEXIBLE_MINUTES_PER_GRAM: f64 = 0.05;
/// PLA prints faster.
pub const FAST_MINUTES_PER_GRAM: f64 = 0.025;

const FLEXIBLE_MATERIAL_ID: &str = "tpu";
const FAST_MATERIAL_ID: &str = "pla";

/// Base print rate for a material, or the default when none resolved.
pub fn minutes_per_gram(material: Option<&MaterialProfile>) -> f64 {
    match material.map(|m| m.id.as_str()) {
        Some(FLEXIBLE_MATERIAL_ID) => FLEXIBLE_MINUTES_PER_GRAM,
        Some(FAST_MATERIAL_ID) => FAST_MINUTES_PER_GRAM,
        _ => DEFAULT_MINUTES_PER_GRAM,
    }
}

/// Estimate how long a job takes to print.
///
/// Advisory, so it never fails: a non-positive (or NaN) mass yields a zero
/// estimate. `fractional_hours` is left unrounded for feeding into
/// `compute_cost`; only the minute fields are rounded.
pub fn estimate_duration(
    mass_grams: f64,
    material: Option<&MaterialProfile>,
    quality: QualityTier,
) -> DurationEstimate {
    let material_name = material.map(|m| m.name.clone());

    if !(mass_grams > 0.0) || !mass_grams.is_finite() {
        return DurationEstimate {
            material: material_name,
            ..DurationEstimate::zero()
        };
    }

    let exact = mass_grams * minutes_per_gram(material) * quality.time_multiplier();
    let total_minutes = exact.round() as u64;

    DurationEstimate {
        total_minutes,
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
        total_minutes_exact: exact,
        fractional_hours: exact / 60.0,
        material: material_name,
    }
}
