//! Cost and production estimation for 3D print jobs.
//!
//! Three pure operations, each a function of its inputs plus a `CostConfig`:
//!
//! - **Cost**: mass, duration, material price and markup -> `CostBreakdown`
//! - **Duration**: mass, material and quality tier -> `DurationEstimate`
//! - **Recommendation**: requirements and a catalog -> best `RecommendationResult`
//!
//! `quote` chains them for the common "price this part" flow.
//!
//! # Example
//!
//! ```
//! use printcost::catalog::default_catalog;
//! use printcost::config::CostConfig;
//! use printcost::estimator::{compute_cost, QualityTier};
//!
//! let catalog = default_catalog();
//! let pla = catalog.get("pla").unwrap();
//!
//! let time = catalog.estimate_duration(300.0, Some("pla"), QualityTier::High);
//! assert_eq!(time.to_string(), "0ч 11м");
//!
//! let cost = compute_cost(300.0, time.fractional_hours, pla.price_per_kg, 200.0, &CostConfig::default())
//!     .unwrap();
//! assert!(cost.final_price > cost.total_cost);
//! ```

mod cost;
mod duration;
mod quote;
mod recommend;
mod types;

pub use cost::{compute_cost, profitability_percent};
pub use duration::{
    estimate_duration, minutes_per_gram, DEFAULT_MINUTES_PER_GRAM, FAST_MINUTES_PER_GRAM,
    FLEXIBLE_MINUTES_PER_GRAM,
};
pub use quote::quote;
pub use recommend::{recommend_material, score_material};
pub use types::*;
