//! Workshop cost configuration.
//!
//! Provides three loading methods:
//! - `default_config()` - Embedded defaults compiled into the binary
//! - `load_config(path)` - A TOML file at an explicit path
//! - `load_config_or_default(path)` - Explicit path, then the user config dir, then defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::EstimatorError;

/// Default cost settings embedded at compile time from `config/cost.toml`.
const DEFAULT_CONFIG: &str = include_str!("../config/cost.toml");

/// Rates that parameterize every cost computation.
///
/// Read-only for the duration of a computation. Callers may keep several
/// (one per workshop, say) and pass whichever applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Currency units per kWh
    pub electricity_price_per_kwh: f64,
    /// Assumed printer draw in kW, not read from any printer record
    pub printer_power_kw: f64,
    /// Machine wear per print hour
    pub amortization_rate_per_hour: f64,
    /// Operator cost per print hour
    pub labor_rate_per_hour: f64,
    /// Fractional surcharge for failed prints (0.10 = 10%)
    pub failure_loading_rate: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            electricity_price_per_kwh: 7.0,
            printer_power_kw: 0.3,
            amortization_rate_per_hour: 5.0,
            labor_rate_per_hour: 50.0,
            failure_loading_rate: 0.10,
        }
    }
}

impl CostConfig {
    /// Reject negative or non-finite rates.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        let fields = [
            ("electricity_price_per_kwh", self.electricity_price_per_kwh),
            ("printer_power_kw", self.printer_power_kw),
            ("amortization_rate_per_hour", self.amortization_rate_per_hour),
            ("labor_rate_per_hour", self.labor_rate_per_hour),
            ("failure_loading_rate", self.failure_loading_rate),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimatorError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Get the default configuration embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug).
pub fn default_config() -> CostConfig {
    toml::from_str(DEFAULT_CONFIG).expect("embedded cost.toml must be valid TOML")
}

/// Load and validate a cost configuration from a TOML file.
///
/// Keys missing from the file keep their default values.
pub fn load_config(path: &Path) -> Result<CostConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cost config {:?}", path))?;
    let config: CostConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse cost config {:?}", path))?;
    config.validate()?;
    info!("Loaded cost config from {:?}", path);
    Ok(config)
}

/// Location of the per-user config file, e.g. `~/.config/printcost/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("printcost").join("config.toml"))
}

/// Resolve the configuration to use.
///
/// An explicit path must load, and its errors are returned. Without one the
/// user config is tried; if it is missing or broken the embedded defaults
/// are used.
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<CostConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match config_path() {
        Some(path) if path.exists() => match load_config(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Ignoring user cost config {:?}: {:#}", path, e);
                Ok(default_config())
            }
        },
        _ => {
            debug!("No user cost config found, using defaults");
            Ok(default_config())
        }
    }
}
