//! Economic assumptions shared by every scenario in a run

pub mod loader;

use crate::error::Result;
use std::env;
use std::path::Path;

/// Annual PMI premium as a fraction of the outstanding balance
pub const DEFAULT_PMI_ANNUAL_RATE: f64 = 0.005;
/// PMI is charged while loan-to-value stays above this percentage
pub const DEFAULT_PMI_LTV_THRESHOLD: f64 = 80.0;
/// Expected annual return on invested savings
pub const DEFAULT_MARKET_RETURN: f64 = 0.08;

/// Container for run-wide assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    /// Annual return earned on the renter's invested difference (fractional)
    pub market_return: f64,

    /// Annual PMI rate applied to the remaining balance (fractional)
    pub pmi_annual_rate: f64,

    /// LTV percentage above which PMI is charged
    pub pmi_ltv_threshold: f64,
}

impl Assumptions {
    /// Default assumptions: 8% market return, 0.5% PMI above 80% LTV
    pub fn default_pricing() -> Self {
        Self {
            market_return: DEFAULT_MARKET_RETURN,
            pmi_annual_rate: DEFAULT_PMI_ANNUAL_RATE,
            pmi_ltv_threshold: DEFAULT_PMI_LTV_THRESHOLD,
        }
    }

    /// Defaults overridden by `MARKET_RETURN`, `PMI_RATE` and `PMI_LTV_THRESHOLD`
    /// environment variables. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default_pricing();
        Self {
            market_return: env_f64("MARKET_RETURN").unwrap_or(defaults.market_return),
            pmi_annual_rate: env_f64("PMI_RATE").unwrap_or(defaults.pmi_annual_rate),
            pmi_ltv_threshold: env_f64("PMI_LTV_THRESHOLD").unwrap_or(defaults.pmi_ltv_threshold),
        }
    }

    /// Load from a `key,value` CSV file (default location: data/assumptions.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load from a specific `key,value` CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let values = loader::load_assumption_values(path)?;
        Ok(Self::default_pricing().with_overrides(&values))
    }

    /// Apply `(key, value)` overrides; unknown keys are logged and skipped
    pub fn with_overrides(mut self, values: &[(String, f64)]) -> Self {
        for (key, value) in values {
            match key.as_str() {
                "market_return" => self.market_return = *value,
                "pmi_annual_rate" => self.pmi_annual_rate = *value,
                "pmi_ltv_threshold" => self.pmi_ltv_threshold = *value,
                other => log::warn!("Ignoring unknown assumption '{}'", other),
            }
        }
        self
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
