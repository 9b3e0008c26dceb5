//! Progressive income tax brackets

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// One marginal bracket. Income between the previous bracket's `max` and
/// this `max` is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of the bracket, `None` for the unbounded top bracket
    pub max: Option<f64>,
    /// Marginal rate (fractional)
    pub rate: f64,
}

impl TaxBracket {
    pub const fn new(max: f64, rate: f64) -> Self {
        Self { max: Some(max), rate }
    }

    pub const fn unbounded(rate: f64) -> Self {
        Self { max: None, rate }
    }

    fn upper(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }
}

/// Single-filer federal brackets: 10% up to 11,000 rising to 37% above 578,125
const SINGLE_FILER: [TaxBracket; 7] = [
    TaxBracket::new(11_000.0, 0.10),
    TaxBracket::new(44_725.0, 0.12),
    TaxBracket::new(95_375.0, 0.22),
    TaxBracket::new(182_100.0, 0.24),
    TaxBracket::new(231_250.0, 0.32),
    TaxBracket::new(578_125.0, 0.35),
    TaxBracket::unbounded(0.37),
];

/// Ordered bracket table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    /// Build a table from brackets in ascending order. Only the last bracket
    /// may be unbounded.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        if brackets.is_empty() {
            return Err(AnalysisError::InvalidBrackets("no brackets".to_string()));
        }

        let mut previous = 0.0;
        for (i, bracket) in brackets.iter().enumerate() {
            let is_last = i == brackets.len() - 1;
            match bracket.max {
                None if !is_last => {
                    return Err(AnalysisError::InvalidBrackets(format!(
                        "bracket {} is unbounded but not last",
                        i + 1
                    )));
                }
                Some(max) if max.is_nan() || max <= previous => {
                    return Err(AnalysisError::InvalidBrackets(format!(
                        "bracket {} upper bound {} is not above {}",
                        i + 1,
                        max,
                        previous
                    )));
                }
                _ => {}
            }
            previous = bracket.upper();
        }

        Ok(Self { brackets })
    }

    /// Default single-filer table
    pub fn single_filer() -> Self {
        Self {
            brackets: SINGLE_FILER.to_vec(),
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Tax owed on `taxable_income`, unrounded.
    ///
    /// Walks brackets from the bottom, filling each up to its width and
    /// stopping once the income is used up.
    pub fn tax_on(&self, taxable_income: f64) -> f64 {
        let mut total_tax = 0.0;
        let mut remaining = taxable_income;
        let mut previous_max = 0.0;

        for bracket in &self.brackets {
            let width = bracket.upper() - previous_max;
            let in_bracket = remaining.max(0.0).min(width);

            total_tax += in_bracket * bracket.rate;
            remaining -= in_bracket;
            previous_max = bracket.upper();

            if remaining <= 0.0 {
                break;
            }
        }

        total_tax
    }

    /// Marginal rate applying to the next dollar above `taxable_income`
    pub fn marginal_rate(&self, taxable_income: f64) -> f64 {
        self.brackets
            .iter()
            .find(|b| taxable_income < b.upper())
            .or(self.brackets.last())
            .map(|b| b.rate)
            .unwrap_or(0.0)
    }
}

impl Default for TaxBracketTable {
    fn default() -> Self {
        Self::single_filer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bracket_boundary() {
        let table = TaxBracketTable::single_filer();
        assert_abs_diff_eq!(table.tax_on(11_000.0), 1_100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(table.tax_on(44_725.0), 1_100.0 + 33_725.0 * 0.12, epsilon = 1e-9);
    }

    #[test]
    fn test_walk_through_four_brackets() {
        let table = TaxBracketTable::single_filer();
        // 1,100 + 4,047 + 11,143 + 3,630
        assert_abs_diff_eq!(table.tax_on(110_500.0), 19_920.0, epsilon = 1e-6);
    }

    #[test]
    fn test_top_bracket() {
        let table = TaxBracketTable::single_filer();
        assert_abs_diff_eq!(table.tax_on(600_000.0), 182_332.0, epsilon = 1e-6);
        assert_eq!(table.marginal_rate(600_000.0), 0.37);
        assert_eq!(table.marginal_rate(50_000.0), 0.22);
    }

    #[test]
    fn test_zero_and_negative_income() {
        let table = TaxBracketTable::single_filer();
        assert_eq!(table.tax_on(0.0), 0.0);
        assert_eq!(table.tax_on(-500.0), 0.0);
    }

    #[test]
    fn test_custom_table() {
        let table = TaxBracketTable::new(vec![
            TaxBracket::new(10_000.0, 0.0),
            TaxBracket::unbounded(0.20),
        ])
        .unwrap();
        assert_abs_diff_eq!(table.tax_on(25_000.0), 3_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_tables() {
        assert!(TaxBracketTable::new(vec![]).is_err());
        assert!(TaxBracketTable::new(vec![
            TaxBracket::unbounded(0.1),
            TaxBracket::new(10_000.0, 0.2),
        ])
        .is_err());
        assert!(TaxBracketTable::new(vec![
            TaxBracket::new(20_000.0, 0.1),
            TaxBracket::new(10_000.0, 0.2),
        ])
        .is_err());
    }
}
