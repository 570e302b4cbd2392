//! Cost decomposition and pricing.

use crate::config::CostConfig;
use crate::error::EstimatorError;

use super::types::CostBreakdown;

/// Round to whole currency units, half away from zero.
fn to_units(amount: f64) -> i64 {
    amount.round() as i64
}

/// Break a job down into cost components and derive its sale price.
///
/// All intermediates stay in floating point; only the returned fields are
/// rounded. Mass and duration must be positive, the material price positive
/// and the markup non-negative. Nothing is substituted for bad input.
///
/// # Arguments
/// * `mass_grams` - Object mass
/// * `duration_hours` - Print time, fractional hours allowed
/// * `price_per_kg` - Material price
/// * `markup_percent` - Markup over loaded cost (200 = price is 3x loaded cost)
/// * `config` - Workshop rates
pub fn compute_cost(
    mass_grams: f64,
    duration_hours: f64,
    price_per_kg: f64,
    markup_percent: f64,
    config: &CostConfig,
) -> Result<CostBreakdown, EstimatorError> {
    // `!(x > 0.0)` also catches NaN
    if !(mass_grams > 0.0) || !mass_grams.is_finite() {
        return Err(EstimatorError::InvalidJobParameters(format!(
            "mass must be positive, got {} g",
            mass_grams
        )));
    }
    if !(duration_hours > 0.0) || !duration_hours.is_finite() {
        return Err(EstimatorError::InvalidJobParameters(format!(
            "duration must be positive, got {} h",
            duration_hours
        )));
    }
    if !(price_per_kg > 0.0) || !price_per_kg.is_finite() {
        return Err(EstimatorError::InvalidJobParameters(format!(
            "material price must be positive, got {}",
            price_per_kg
        )));
    }
    if !(markup_percent >= 0.0) || !markup_percent.is_finite() {
        return Err(EstimatorError::InvalidJobParameters(format!(
            "markup must be non-negative, got {}%",
            markup_percent
        )));
    }
    config.validate()?;

    let material_cost = (mass_grams / 1000.0) * price_per_kg;
    let electricity_cost =
        duration_hours * config.printer_power_kw * config.electricity_price_per_kwh;
    let amortization_cost = duration_hours * config.amortization_rate_per_hour;
    let labor_cost = duration_hours * config.labor_rate_per_hour;

    let raw_cost = material_cost + electricity_cost + amortization_cost + labor_cost;
    let loaded_cost = raw_cost * (1.0 + config.failure_loading_rate);

    let markup = markup_percent / 100.0;
    let final_price = loaded_cost * (1.0 + markup);
    // final_price - loaded_cost and loaded_cost * markup are the same amount;
    // rounding one value keeps the two reported fields identical.
    let profit = to_units(final_price - loaded_cost);
    let markup_amount = profit;

    Ok(CostBreakdown {
        material_cost: to_units(material_cost),
        electricity_cost: to_units(electricity_cost),
        amortization_cost: to_units(amortization_cost),
        labor_cost: to_units(labor_cost),
        raw_cost: to_units(raw_cost),
        total_cost: to_units(loaded_cost),
        final_price: to_units(final_price),
        profit,
        markup_amount,
    })
}

/// Margin of `price` over `cost` in percent. `None` when cost is not positive.
pub fn profitability_percent(price: f64, cost: f64) -> Option<f64> {
    if cost > 0.0 {
        Some((price - cost) / cost * 100.0)
    } else {
        None
    }
}
