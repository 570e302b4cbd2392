//! End-to-end quoting: resolve the material, fill in a missing duration,
//! then price the job.

use tracing::debug;

use crate::catalog::MaterialCatalog;
use crate::config::CostConfig;
use crate::error::EstimatorError;

use super::cost::{compute_cost, profitability_percent};
use super::duration::estimate_duration;
use super::types::{JobParameters, Quote};

/// Price `job` printed in `material_id`.
///
/// When the job carries no duration, the unrounded estimate from
/// `estimate_duration` is used. Cost validation still applies, so a job
/// whose mass is non-positive fails with `InvalidJobParameters`.
pub fn quote(
    job: &JobParameters,
    material_id: &str,
    catalog: &MaterialCatalog,
    config: &CostConfig,
) -> Result<Quote, EstimatorError> {
    let material = catalog
        .get(material_id)
        .ok_or_else(|| EstimatorError::UnknownMaterial(material_id.to_string()))?;

    let (duration_hours, estimated_duration) = match job.duration_hours {
        Some(hours) => (hours, None),
        None => {
            let estimate = estimate_duration(job.mass_grams, Some(material), job.quality);
            (estimate.fractional_hours, Some(estimate))
        }
    };

    let cost = compute_cost(
        job.mass_grams,
        duration_hours,
        material.price_per_kg,
        job.markup_percent,
        config,
    )?;

    debug!(
        "Quoted {} g of {} over {:.2} h: cost {}, price {}",
        job.mass_grams, material.id, duration_hours, cost.total_cost, cost.final_price
    );

    Ok(Quote {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        temperatures: catalog.temperatures_for(&material.id),
        quality: job.quality,
        markup_percent: job.markup_percent,
        duration_hours,
        estimated_duration,
        profitability_percent: profitability_percent(
            cost.final_price as f64,
            cost.total_cost as f64,
        ),
        cost,
    })
}
