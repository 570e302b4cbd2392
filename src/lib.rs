pub mod catalog;
pub mod config;
mod error;
pub mod estimator;

pub use catalog::{default_catalog, load_catalog, MaterialCatalog, MaterialProfile};
pub use config::CostConfig;
pub use error::EstimatorError;
pub use estimator::{
    compute_cost, estimate_duration, quote, recommend_material, CostBreakdown, DurationEstimate,
    JobParameters, QualityTier, Quote, RecommendationResult, Requirements,
};

/// Install the global tracing subscriber. Honors `RUST_LOG`, defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
