//! CSV-based assumption loader
//!
//! File format: header `key,value`, one assumption per row.

use crate::error::{AnalysisError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the assumptions file
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions.csv";

/// Load `(key, value)` pairs from a CSV file
pub fn load_assumption_values(path: &Path) -> Result<Vec<(String, f64)>> {
    let file = File::open(path)?;
    let values = load_assumption_values_from_reader(file)?;
    log::info!("Loaded {} assumptions from {}", values.len(), path.display());
    Ok(values)
}

/// Load `(key, value)` pairs from any reader
pub fn load_assumption_values_from_reader<R: Read>(reader: R) -> Result<Vec<(String, f64)>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut values = Vec::new();

    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or_default().trim().to_string();
        let raw = record.get(1).unwrap_or_default().trim();
        let value: f64 = raw.parse().map_err(|_| AnalysisError::InvalidAssumption {
            key: key.clone(),
            value: raw.to_string(),
        })?;
        values.push((key, value));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;

    #[test]
    fn test_load_values() {
        let data = "key,value\nmarket_return,0.07\npmi_ltv_threshold,78\n";
        let values = load_assumption_values_from_reader(data.as_bytes()).unwrap();
        assert_eq!(values.len(), 2);

        let a = Assumptions::default_pricing().with_overrides(&values);
        assert_eq!(a.market_return, 0.07);
        assert_eq!(a.pmi_ltv_threshold, 78.0);
    }

    #[test]
    fn test_load_default_file() {
        let a = Assumptions::from_csv().expect("Failed to load assumptions");
        assert_eq!(a, Assumptions::default_pricing());
    }

    #[test]
    fn test_bad_value() {
        let data = "key,value\nmarket_return,eight\n";
        let err = load_assumption_values_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidAssumption { .. }));
    }
}
