//! Income tax breakdown and multi-year take-home projection

use super::brackets::TaxBracketTable;
use crate::rounding::{round_cents, round_to};
use serde::{Deserialize, Serialize};

/// Pay periods per year for the take-home figure
const BIWEEKLY_PERIODS: f64 = 26.0;

/// Result of a single tax calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub gross_income: f64,
    pub deductions: f64,
    /// Pre-tax retirement contribution (401k and similar)
    pub pretax_contribution: f64,
    pub taxable_income: f64,
    pub total_tax: f64,
    pub after_tax_income: f64,
    /// Percentage of gross income, formatted like `"13.74%"`
    pub effective_tax_rate: String,
    /// Take-home pay per biweekly paycheck after the contribution
    pub biweekly_take_home: f64,
}

/// Tax calculator over a bracket table
#[derive(Debug, Clone, Default)]
pub struct TaxCalculator {
    table: TaxBracketTable,
}

impl TaxCalculator {
    pub fn new(table: TaxBracketTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TaxBracketTable {
        &self.table
    }

    pub fn calculate(&self, income: f64, deductions: f64, pretax_contribution: f64) -> TaxBreakdown {
        let taxable_income = (income - deductions - pretax_contribution).max(0.0);
        let total_tax = round_cents(self.table.tax_on(taxable_income));
        let after_tax_income = round_cents(income - total_tax);
        let biweekly_take_home = round_to((after_tax_income - pretax_contribution) / BIWEEKLY_PERIODS, 1);

        let effective_tax_rate = if income > 0.0 {
            format!("{:.2}%", round_cents(total_tax / income * 100.0))
        } else {
            "0.00%".to_string()
        };

        TaxBreakdown {
            gross_income: income,
            deductions,
            pretax_contribution,
            taxable_income,
            total_tax,
            after_tax_income,
            effective_tax_rate,
            biweekly_take_home,
        }
    }

    /// Project `years` of income starting at `start_income`, growing by
    /// `raise_rate` each year with fixed deductions and contribution.
    pub fn project_lifetime_income(
        &self,
        start_income: f64,
        deductions: f64,
        pretax_contribution: f64,
        years: u32,
        raise_rate: f64,
    ) -> LifetimeIncome {
        let mut income = start_income;
        let mut lifetime = LifetimeIncome::default();

        for _ in 0..years {
            let breakdown = self.calculate(income, deductions, pretax_contribution);
            lifetime.total_after_tax_income += breakdown.after_tax_income;
            lifetime.total_tax += breakdown.total_tax;
            lifetime.years.push(breakdown);
            income *= 1.0 + raise_rate;
        }

        lifetime
    }
}

/// Totals across a multi-year income projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifetimeIncome {
    pub years: Vec<TaxBreakdown>,
    pub total_after_tax_income: f64,
    pub total_tax: f64,
}

/// Calculate tax with the default single-filer brackets
pub fn calculate_tax(income: f64, deductions: f64, pretax_contribution: f64) -> TaxBreakdown {
    TaxCalculator::default().calculate(income, deductions, pretax_contribution)
}

/// Multi-year projection with the default single-filer brackets
pub fn project_lifetime_income(
    start_income: f64,
    deductions: f64,
    pretax_contribution: f64,
    years: u32,
    raise_rate: f64,
) -> LifetimeIncome {
    TaxCalculator::default().project_lifetime_income(start_income, deductions, pretax_contribution, years, raise_rate)
}
