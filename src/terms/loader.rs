//! Load scenarios from a CSV file
//!
//! Required columns: `home_price,down_payment,term_years,annual_rate,monthly_rent`.
//! Optional columns fall back to the defaults in [`super::data`].

use super::data::{
    MortgageTerms, RentTerms, Scenario, DEFAULT_HOME_APPRECIATION, DEFAULT_INSURANCE_RATE,
    DEFAULT_MAINTENANCE_RATE, DEFAULT_PROPERTY_TAX_RATE, DEFAULT_RENT_INCREASE,
};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Bundled sample scenarios
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

fn default_maintenance_rate() -> f64 {
    DEFAULT_MAINTENANCE_RATE
}

fn default_property_tax_rate() -> f64 {
    DEFAULT_PROPERTY_TAX_RATE
}

fn default_insurance_rate() -> f64 {
    DEFAULT_INSURANCE_RATE
}

fn default_home_appreciation() -> f64 {
    DEFAULT_HOME_APPRECIATION
}

fn default_rent_increase() -> f64 {
    DEFAULT_RENT_INCREASE
}

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    home_price: f64,
    down_payment: f64,
    term_years: u32,
    annual_rate: f64,
    monthly_rent: f64,
    #[serde(default = "default_maintenance_rate")]
    maintenance_rate: f64,
    #[serde(default = "default_property_tax_rate")]
    property_tax_rate: f64,
    #[serde(default = "default_insurance_rate")]
    insurance_rate: f64,
    #[serde(default = "default_home_appreciation")]
    home_appreciation: f64,
    #[serde(default = "default_rent_increase")]
    annual_rent_increase: f64,
}

impl CsvRow {
    fn into_scenario(self) -> Scenario {
        let mortgage = MortgageTerms {
            home_price: self.home_price,
            down_payment: self.down_payment,
            term_years: self.term_years,
            annual_interest_rate_percent: self.annual_rate,
            maintenance_rate_percent: self.maintenance_rate,
            property_tax_rate_percent: self.property_tax_rate,
            insurance_rate_percent: self.insurance_rate,
            home_appreciation_percent: self.home_appreciation,
        };
        Scenario::new(mortgage, RentTerms::new(self.monthly_rent, self.annual_rent_increase))
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    let scenarios = read_scenarios(Reader::from_path(path)?)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (string buffer, stdin, ...)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    read_scenarios(Reader::from_reader(reader))
}

fn read_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }
    Ok(scenarios)
}
