//! Mortgage and rent inputs for a single scenario

use serde::{Deserialize, Serialize};

/// Default annual maintenance cost, percent of home value
pub const DEFAULT_MAINTENANCE_RATE: f64 = 1.0;
/// Default annual property tax, percent of home value
pub const DEFAULT_PROPERTY_TAX_RATE: f64 = 0.9;
/// Default annual home insurance, percent of home value
pub const DEFAULT_INSURANCE_RATE: f64 = 0.3;
/// Default annual home appreciation, percent
pub const DEFAULT_HOME_APPRECIATION: f64 = 5.0;
/// Default monthly rent
pub const DEFAULT_MONTHLY_RENT: f64 = 2300.0;
/// Default annual rent escalation (fractional)
pub const DEFAULT_RENT_INCREASE: f64 = 0.03;

/// Fixed-rate mortgage terms plus the ownership cost rates applied to the home value
///
/// Rates ending in `_percent` are expressed as percentages (6.0 = 6%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    /// Purchase price of the home
    pub home_price: f64,

    /// Cash paid up front
    pub down_payment: f64,

    /// Loan term in years
    pub term_years: u32,

    /// Annual interest rate, percent
    pub annual_interest_rate_percent: f64,

    /// Annual maintenance, percent of current home value
    pub maintenance_rate_percent: f64,

    /// Annual property tax, percent of current home value
    pub property_tax_rate_percent: f64,

    /// Annual insurance, percent of current home value
    pub insurance_rate_percent: f64,

    /// Annual home appreciation, percent
    pub home_appreciation_percent: f64,
}

impl MortgageTerms {
    /// Create terms with the default maintenance, tax, insurance and appreciation rates
    pub fn new(home_price: f64, down_payment: f64, term_years: u32, annual_interest_rate_percent: f64) -> Self {
        Self {
            home_price,
            down_payment,
            term_years,
            annual_interest_rate_percent,
            maintenance_rate_percent: DEFAULT_MAINTENANCE_RATE,
            property_tax_rate_percent: DEFAULT_PROPERTY_TAX_RATE,
            insurance_rate_percent: DEFAULT_INSURANCE_RATE,
            home_appreciation_percent: DEFAULT_HOME_APPRECIATION,
        }
    }

    /// Create terms where the down payment is a fraction of the price (0.03 = 3% down)
    pub fn with_down_payment_fraction(
        home_price: f64,
        down_fraction: f64,
        term_years: u32,
        annual_interest_rate_percent: f64,
    ) -> Self {
        Self::new(home_price, home_price * down_fraction, term_years, annual_interest_rate_percent)
    }

    /// Amount borrowed
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Loan-to-value at purchase, percent
    pub fn initial_ltv(&self) -> f64 {
        self.loan_amount() / self.home_price * 100.0
    }

    /// Down payment as a percent of the price
    pub fn down_payment_percent(&self) -> f64 {
        self.down_payment / self.home_price * 100.0
    }
}

/// Rent paid in the renting alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentTerms {
    /// Rent in the first month
    pub monthly_rent: f64,

    /// Annual escalation, fractional (0.03 = 3%)
    pub annual_rent_increase_rate: f64,
}

impl RentTerms {
    pub fn new(monthly_rent: f64, annual_rent_increase_rate: f64) -> Self {
        Self {
            monthly_rent,
            annual_rent_increase_rate,
        }
    }

    /// First-year rent
    pub fn annual_rent(&self) -> f64 {
        self.monthly_rent * 12.0
    }
}

impl Default for RentTerms {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHLY_RENT, DEFAULT_RENT_INCREASE)
    }
}

/// One buy-vs-rent scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub mortgage: MortgageTerms,
    pub rent: RentTerms,
}

impl Scenario {
    pub fn new(mortgage: MortgageTerms, rent: RentTerms) -> Self {
        Self { mortgage, rent }
    }
}
