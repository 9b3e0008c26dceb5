//! Amortization output structures

use serde::{Deserialize, Serialize};

/// One simulated year of the loan
///
/// Monetary fields are rounded to cents. `total_monthly_payment` is the sum
/// of the five rounded monthly components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYearRecord {
    pub year: u32,
    /// Home value at the start of the year
    pub home_value: f64,
    pub monthly_payment: f64,
    /// Principal repaid during the year
    pub principal_paid: f64,
    /// Interest paid during the year
    pub interest_paid: f64,
    /// End-of-year balance, floored at zero
    pub remaining_balance: f64,
    pub monthly_pmi: f64,
    pub monthly_maintenance: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub total_monthly_payment: f64,
    /// Cumulative cost of ownership through this year
    pub total_amount_paid: f64,
}

/// Complete amortization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Purchase price the schedule was built for
    pub home_price: f64,

    /// Amount borrowed
    pub loan_amount: f64,

    /// Unrounded level payment
    pub monthly_payment: f64,

    /// Loan-to-value at purchase, percent
    pub initial_ltv: f64,

    /// One record per year of the term
    pub years: Vec<AmortizationYearRecord>,
}

impl AmortizationSchedule {
    pub fn new(home_price: f64, loan_amount: f64, monthly_payment: f64) -> Self {
        Self {
            home_price,
            loan_amount,
            monthly_payment,
            initial_ltv: loan_amount / home_price * 100.0,
            years: Vec::new(),
        }
    }

    /// Add a year record
    pub fn add_year(&mut self, record: AmortizationYearRecord) {
        self.years.push(record);
    }

    /// Number of simulated years
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Last year in which PMI was charged, if any
    pub fn last_pmi_year(&self) -> Option<u32> {
        self.years
            .iter()
            .filter(|r| r.monthly_pmi > 0.0)
            .map(|r| r.year)
            .last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_interest: f64 = self.years.iter().map(|r| r.interest_paid).sum();
        let total_principal: f64 = self.years.iter().map(|r| r.principal_paid).sum();
        let total_pmi: f64 = self.years.iter().map(|r| r.monthly_pmi).sum::<f64>() * 12.0;
        let total_maintenance: f64 = self.years.iter().map(|r| r.monthly_maintenance).sum::<f64>() * 12.0;
        let total_property_tax: f64 = self.years.iter().map(|r| r.monthly_property_tax).sum::<f64>() * 12.0;
        let total_insurance: f64 = self.years.iter().map(|r| r.monthly_insurance).sum::<f64>() * 12.0;

        let total_amount_paid = self.years.last().map(|r| r.total_amount_paid).unwrap_or(0.0);
        let final_home_value = self.years.last().map(|r| r.home_value).unwrap_or(self.home_price);
        let total_appreciation = final_home_value - self.home_price;

        ScheduleSummary {
            total_years: self.years.len() as u32,
            total_interest,
            total_principal,
            total_pmi,
            total_maintenance,
            total_property_tax,
            total_insurance,
            total_amount_paid,
            final_home_value,
            total_appreciation,
            appreciation_percent: total_appreciation / self.home_price * 100.0,
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_years: u32,
    pub total_interest: f64,
    pub total_principal: f64,
    pub total_pmi: f64,
    pub total_maintenance: f64,
    pub total_property_tax: f64,
    pub total_insurance: f64,
    pub total_amount_paid: f64,
    /// Home value at the start of the final year
    pub final_home_value: f64,
    pub total_appreciation: f64,
    pub appreciation_percent: f64,
}
