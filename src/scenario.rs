//! Scenario runner for batch comparisons
//!
//! Holds one set of assumptions and runs many scenarios against it:
//! single runs, parallel batches, home price sweeps and down payment
//! comparisons.

use crate::amortization::MortgageAmortizer;
use crate::assumptions::Assumptions;
use crate::comparison::{compound_interest, ComparisonTable, RentComparison};
use crate::error::Result;
use crate::terms::{MortgageTerms, RentTerms, Scenario};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Owning-vs-renting snapshot for one home price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSweepPoint {
    pub home_price: f64,
    /// Home value at the sampled year
    pub home_value: f64,
    /// Renter's invested savings at the sampled year
    pub savings_with_investment: f64,
    /// `home_value - savings_with_investment`
    pub investment_saving: f64,
}

/// Cost of a smaller down payment against investing the difference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentComparison {
    pub home_price: f64,
    pub low_down_payment: f64,
    pub high_down_payment: f64,
    /// Year index (0-based) the comparison is taken at
    pub year_index: usize,
    /// Extra cumulative ownership cost paid with the lower down payment
    pub extra_cost_paid: f64,
    /// The down payment difference compounded at the market return
    pub invested_difference: f64,
}

/// `count` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(Assumptions::from_env());
/// let prices = linspace(350_000.0, 750_000.0, 9);
/// let points = runner.price_sweep(&prices, 0.03, 30, 6.0, &RentTerms::new(2500.0, 0.03), 10)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
    comparison: RentComparison,
}

impl ScenarioRunner {
    pub fn new(assumptions: Assumptions) -> Self {
        let comparison = RentComparison::new(&assumptions);
        Self {
            assumptions,
            comparison,
        }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> Result<ComparisonTable> {
        self.comparison.compare(&scenario.mortgage, &scenario.rent)
    }

    /// Run scenarios in parallel, results in input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Result<ComparisonTable>> {
        log::info!("Running {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Compare owning against renting across home prices with the same
    /// down payment fraction, sampled at `year_index` (0-based).
    /// Prices whose schedule is shorter than `year_index` are skipped.
    pub fn price_sweep(
        &self,
        home_prices: &[f64],
        down_fraction: f64,
        term_years: u32,
        annual_rate: f64,
        rent: &RentTerms,
        year_index: usize,
    ) -> Result<Vec<PriceSweepPoint>> {
        let tables: Vec<(f64, ComparisonTable)> = home_prices
            .par_iter()
            .map(|&price| {
                let terms = MortgageTerms::with_down_payment_fraction(price, down_fraction, term_years, annual_rate);
                self.comparison.compare(&terms, rent).map(|table| (price, table))
            })
            .collect::<Result<_>>()?;

        let points = tables
            .iter()
            .filter_map(|(price, table)| {
                let row = table.row(year_index)?;
                Some(PriceSweepPoint {
                    home_price: *price,
                    home_value: row.home_value,
                    savings_with_investment: row.savings_with_investment,
                    investment_saving: row.home_value - row.savings_with_investment,
                })
            })
            .collect::<Vec<_>>();

        if points.len() < home_prices.len() {
            log::warn!(
                "Year index {} beyond term for {} of {} prices",
                year_index,
                home_prices.len() - points.len(),
                home_prices.len()
            );
        }

        Ok(points)
    }

    /// Extra ownership cost of putting `low_fraction` down instead of
    /// `high_fraction`, against investing the down payment difference for
    /// `year_index` years. Returns `None` if the term is shorter than the index.
    pub fn compare_down_payments(
        &self,
        home_price: f64,
        low_fraction: f64,
        high_fraction: f64,
        term_years: u32,
        annual_rate: f64,
        year_index: usize,
    ) -> Result<Option<DownPaymentComparison>> {
        let amortizer = MortgageAmortizer::from_assumptions(&self.assumptions);
        let low = amortizer.amortize(&MortgageTerms::with_down_payment_fraction(
            home_price,
            low_fraction,
            term_years,
            annual_rate,
        ))?;
        let high = amortizer.amortize(&MortgageTerms::with_down_payment_fraction(
            home_price,
            high_fraction,
            term_years,
            annual_rate,
        ))?;

        let (Some(low_row), Some(high_row)) = (low.years.get(year_index), high.years.get(year_index)) else {
            return Ok(None);
        };

        let difference = home_price * (high_fraction - low_fraction);
        Ok(Some(DownPaymentComparison {
            home_price,
            low_down_payment: home_price * low_fraction,
            high_down_payment: home_price * high_fraction,
            year_index,
            extra_cost_paid: low_row.total_amount_paid - high_row.total_amount_paid,
            invested_difference: compound_interest(difference, self.assumptions.market_return, year_index as u32),
        }))
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(Assumptions::default_pricing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenarios() -> Vec<Scenario> {
        [0.03, 0.10, 0.20]
            .iter()
            .map(|&f| {
                Scenario::new(
                    MortgageTerms::with_down_payment_fraction(600_000.0, f, 30, 6.0),
                    RentTerms::new(2500.0, 0.03),
                )
            })
            .collect()
    }

    #[test]
    fn test_linspace() {
        let prices = linspace(350_000.0, 750_000.0, 9);
        assert_eq!(prices.len(), 9);
        assert_eq!(prices[0], 350_000.0);
        assert_eq!(prices[1], 400_000.0);
        assert_eq!(prices[8], 750_000.0);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(5.0, 9.0, 1), vec![5.0]);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::default();
        let scenarios = scenarios();
        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), 3);

        for (scenario, result) in scenarios.iter().zip(&results) {
            let single = runner.run(scenario).unwrap();
            assert_eq!(result.as_ref().unwrap(), &single);
        }

        // Larger down payment, smaller level payment
        let payments: Vec<f64> = results.iter().map(|r| r.as_ref().unwrap().rows[0].monthly_payment).collect();
        assert!(payments[0] > payments[1] && payments[1] > payments[2]);
    }

    #[test]
    fn test_price_sweep() {
        let runner = ScenarioRunner::default();
        let prices = linspace(350_000.0, 750_000.0, 9);
        let points = runner
            .price_sweep(&prices, 0.03, 30, 6.0, &RentTerms::new(2500.0, 0.03), 10)
            .unwrap();

        assert_eq!(points.len(), 9);
        for (point, price) in points.iter().zip(&prices) {
            assert_eq!(point.home_price, *price);
            assert_eq!(point.investment_saving, point.home_value - point.savings_with_investment);
        }
        // Home value at year 11 grows with price
        assert!(points.windows(2).all(|w| w[1].home_value > w[0].home_value));
    }

    #[test]
    fn test_price_sweep_past_term() {
        let runner = ScenarioRunner::default();
        let points = runner
            .price_sweep(&[400_000.0], 0.03, 5, 6.0, &RentTerms::default(), 10)
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_compare_down_payments() {
        let runner = ScenarioRunner::default();
        let cmp = runner
            .compare_down_payments(600_000.0, 0.03, 0.10, 30, 6.0, 10)
            .unwrap()
            .unwrap();

        assert!(cmp.extra_cost_paid > 0.0);
        assert_relative_eq!(cmp.invested_difference, compound_interest(42_000.0, 0.08, 10), max_relative = 1e-9);
        assert!(runner.compare_down_payments(600_000.0, 0.03, 0.10, 5, 6.0, 10).unwrap().is_none());
    }

    #[test]
    fn test_invalid_rate_in_sweep() {
        let runner = ScenarioRunner::default();
        assert!(runner
            .price_sweep(&[400_000.0], 0.03, 30, 0.0, &RentTerms::default(), 1)
            .is_err());
    }
}
