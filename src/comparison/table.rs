//! Rent-vs-buy comparison table built on top of an amortization schedule

use super::rent::project_rent;
use super::savings::accumulate_savings;
use crate::amortization::{AmortizationSchedule, AmortizationYearRecord, MortgageAmortizer};
use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::terms::{MortgageTerms, RentTerms};
use serde::{Deserialize, Serialize};

/// One year of the comparison: the amortization record followed by the
/// rent and investment columns. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub year: u32,
    pub home_value: f64,
    pub monthly_payment: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub remaining_balance: f64,
    pub monthly_pmi: f64,
    pub monthly_maintenance: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub total_monthly_payment: f64,
    pub total_amount_paid: f64,

    // Renting
    pub total_rent: f64,
    pub paid_rent: f64,
    pub monthly_rent: f64,

    // Owning vs renting
    /// `(total_monthly_payment - monthly_rent) * 12`
    pub annual_payment_difference: f64,
    /// Running sum of `annual_payment_difference`
    pub net_payment_difference: f64,
    pub savings_with_investment: f64,
    /// `home_value - remaining_balance`
    pub home_equity: f64,
    /// `savings_with_investment - home_equity`
    pub difference_with_investment: f64,
}

impl ComparisonRow {
    /// Start a row from a year record; comparison columns are zeroed
    pub fn from_record(record: &AmortizationYearRecord) -> Self {
        Self {
            year: record.year,
            home_value: record.home_value,
            monthly_payment: record.monthly_payment,
            principal_paid: record.principal_paid,
            interest_paid: record.interest_paid,
            remaining_balance: record.remaining_balance,
            monthly_pmi: record.monthly_pmi,
            monthly_maintenance: record.monthly_maintenance,
            monthly_property_tax: record.monthly_property_tax,
            monthly_insurance: record.monthly_insurance,
            total_monthly_payment: record.total_monthly_payment,
            total_amount_paid: record.total_amount_paid,
            total_rent: 0.0,
            paid_rent: 0.0,
            monthly_rent: 0.0,
            annual_payment_difference: 0.0,
            net_payment_difference: 0.0,
            savings_with_investment: 0.0,
            home_equity: 0.0,
            difference_with_investment: 0.0,
        }
    }
}

/// Complete comparison result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Amortization the rows were built from
    pub schedule: AmortizationSchedule,

    /// Year-ordered rows
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a 0-based year index
    pub fn row(&self, index: usize) -> Option<&ComparisonRow> {
        self.rows.get(index)
    }

    /// Get summary statistics for the renting side
    pub fn summary(&self) -> ComparisonSummary {
        let first = self.rows.first();
        let last = self.rows.last();

        let final_savings = last.map(|r| r.savings_with_investment).unwrap_or(0.0);
        let final_home_value = last.map(|r| r.home_value).unwrap_or(self.schedule.home_price);

        ComparisonSummary {
            initial_monthly_rent: first.map(|r| r.monthly_rent).unwrap_or(0.0),
            final_monthly_rent: last.map(|r| r.monthly_rent).unwrap_or(0.0),
            total_rent_paid: last.map(|r| r.total_rent).unwrap_or(0.0),
            final_savings_with_investment: final_savings,
            final_home_value,
            net_difference: final_savings - final_home_value,
            final_difference_with_investment: last.map(|r| r.difference_with_investment).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub initial_monthly_rent: f64,
    pub final_monthly_rent: f64,
    pub total_rent_paid: f64,
    pub final_savings_with_investment: f64,
    pub final_home_value: f64,
    /// Final invested savings minus final home value
    pub net_difference: f64,
    pub final_difference_with_investment: f64,
}

/// Rent comparison extension for the amortizer
#[derive(Debug, Clone)]
pub struct RentComparison {
    amortizer: MortgageAmortizer,
    market_return: f64,
}

impl RentComparison {
    pub fn new(assumptions: &Assumptions) -> Self {
        Self {
            amortizer: MortgageAmortizer::from_assumptions(assumptions),
            market_return: assumptions.market_return,
        }
    }

    /// Amortize `terms` and annotate every year with the rent comparison
    pub fn compare(&self, terms: &MortgageTerms, rent: &RentTerms) -> Result<ComparisonTable> {
        let schedule = self.amortizer.amortize(terms)?;
        Ok(self.extend(schedule, terms.down_payment, rent))
    }

    /// Annotate an existing schedule with rent and investment columns
    pub fn extend(&self, schedule: AmortizationSchedule, down_payment: f64, rent: &RentTerms) -> ComparisonTable {
        let years = schedule.years.len() as u32;
        let rents = project_rent(rent.annual_rent(), years, rent.annual_rent_increase_rate);

        let mut rows: Vec<ComparisonRow> = schedule.years.iter().map(ComparisonRow::from_record).collect();

        let mut net_difference = 0.0;
        for (i, row) in rows.iter_mut().enumerate() {
            row.total_rent = rents.total_rent[i];
            row.paid_rent = rents.paid_rent[i];
            row.monthly_rent = rents.monthly_rent[i];

            row.annual_payment_difference = (row.total_monthly_payment - row.monthly_rent) * 12.0;
            net_difference += row.annual_payment_difference;
            row.net_payment_difference = net_difference;
        }

        let differences: Vec<f64> = rows.iter().map(|r| r.annual_payment_difference).collect();
        let savings = accumulate_savings(&differences, down_payment, self.market_return);

        for (row, saved) in rows.iter_mut().zip(savings) {
            row.savings_with_investment = saved;
            row.home_equity = row.home_value - row.remaining_balance;
            row.difference_with_investment = row.savings_with_investment - row.home_equity;
        }

        ComparisonTable { schedule, rows }
    }
}

impl Default for RentComparison {
    fn default() -> Self {
        Self::new(&Assumptions::default_pricing())
    }
}

/// Build a comparison table with the given assumptions
pub fn compare(terms: &MortgageTerms, rent: &RentTerms, assumptions: &Assumptions) -> Result<ComparisonTable> {
    RentComparison::new(assumptions).compare(terms, rent)
}
