//! Running state of a loan during amortization

use crate::terms::MortgageTerms;

/// State carried from one simulated year to the next
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Current year (1-indexed once the first year starts)
    pub year: u32,

    /// Outstanding balance. Not clamped: the final year can end a few
    /// nanodollars below zero and that value is carried as-is.
    pub remaining_balance: f64,

    /// Home value at the start of the current year
    pub home_value: f64,

    /// Principal paid so far this year
    pub yearly_principal: f64,

    /// Interest paid so far this year
    pub yearly_interest: f64,

    /// Cumulative cost of ownership across all years (unrounded)
    pub total_amount_paid: f64,
}

impl AmortizationState {
    /// Initialize state at loan origination
    pub fn from_terms(terms: &MortgageTerms) -> Self {
        Self {
            year: 0,
            remaining_balance: terms.loan_amount(),
            home_value: terms.home_price,
            yearly_principal: 0.0,
            yearly_interest: 0.0,
            total_amount_paid: 0.0,
        }
    }

    /// Advance to the next year and reset yearly accumulators
    pub fn advance_year(&mut self) {
        self.year += 1;
        self.yearly_principal = 0.0;
        self.yearly_interest = 0.0;
    }

    /// Apply one monthly payment
    pub fn apply_payment(&mut self, monthly_payment: f64, monthly_rate: f64) {
        let interest = self.remaining_balance * monthly_rate;
        let principal = monthly_payment - interest;

        self.yearly_principal += principal;
        self.yearly_interest += interest;
        self.remaining_balance -= principal;
    }

    /// Loan-to-value against the purchase price, percent
    pub fn current_ltv(&self, home_price: f64) -> f64 {
        self.remaining_balance / home_price * 100.0
    }

    /// Balance shown to callers
    pub fn display_balance(&self) -> f64 {
        self.remaining_balance.max(0.0)
    }

    /// Grow the home value by the annual appreciation rate
    pub fn appreciate(&mut self, appreciation_percent: f64) {
        self.home_value *= 1.0 + appreciation_percent / 100.0;
    }
}
