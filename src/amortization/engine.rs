//! Year-by-year amortization of a fixed-rate mortgage with ownership costs

use super::schedule::{AmortizationSchedule, AmortizationYearRecord};
use super::state::AmortizationState;
use crate::assumptions::{Assumptions, DEFAULT_PMI_ANNUAL_RATE, DEFAULT_PMI_LTV_THRESHOLD};
use crate::error::{AnalysisError, Result};
use crate::rounding::round_cents;
use crate::terms::MortgageTerms;

/// PMI settings used by the amortizer
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationConfig {
    /// Annual PMI premium as a fraction of the remaining balance
    pub pmi_annual_rate: f64,

    /// PMI is charged while LTV (percent) is strictly above this value
    pub pmi_ltv_threshold: f64,
}

impl Default for AmortizationConfig {
    fn default() -> Self {
        Self {
            pmi_annual_rate: DEFAULT_PMI_ANNUAL_RATE,
            pmi_ltv_threshold: DEFAULT_PMI_LTV_THRESHOLD,
        }
    }
}

impl From<&Assumptions> for AmortizationConfig {
    fn from(assumptions: &Assumptions) -> Self {
        Self {
            pmi_annual_rate: assumptions.pmi_annual_rate,
            pmi_ltv_threshold: assumptions.pmi_ltv_threshold,
        }
    }
}

/// Level monthly payment from the annuity formula
///
/// `loan * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
/// number of payments. Fails for a zero, negative or non-finite rate.
pub fn monthly_payment(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> Result<f64> {
    if !annual_rate_percent.is_finite() || annual_rate_percent <= 0.0 {
        return Err(AnalysisError::InvalidRate { rate: annual_rate_percent });
    }
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let num_payments = f64::from(term_years * 12);
    let growth = (1.0 + monthly_rate).powf(num_payments);

    Ok(loan_amount * (monthly_rate * growth) / (growth - 1.0))
}

/// Main amortization engine
#[derive(Debug, Clone, Default)]
pub struct MortgageAmortizer {
    config: AmortizationConfig,
}

impl MortgageAmortizer {
    /// Create an amortizer with the given PMI settings
    pub fn new(config: AmortizationConfig) -> Self {
        Self { config }
    }

    pub fn from_assumptions(assumptions: &Assumptions) -> Self {
        Self::new(AmortizationConfig::from(assumptions))
    }

    pub fn config(&self) -> &AmortizationConfig {
        &self.config
    }

    /// Simulate the full term, one record per year
    pub fn amortize(&self, terms: &MortgageTerms) -> Result<AmortizationSchedule> {
        let loan_amount = terms.loan_amount();
        let monthly_rate = terms.annual_interest_rate_percent / 100.0 / 12.0;
        let payment = monthly_payment(loan_amount, terms.annual_interest_rate_percent, terms.term_years)?;

        let mut schedule = AmortizationSchedule::new(terms.home_price, loan_amount, payment);
        let mut state = AmortizationState::from_terms(terms);

        for _year in 1..=terms.term_years {
            state.advance_year();

            for _month in 0..12 {
                state.apply_payment(payment, monthly_rate);
            }

            let record = self.close_year(terms, &mut state, payment);
            log::debug!(
                "year {}: balance={:.2} pmi={:.2} total_paid={:.2}",
                record.year,
                record.remaining_balance,
                record.monthly_pmi,
                record.total_amount_paid
            );
            schedule.add_year(record);

            state.appreciate(terms.home_appreciation_percent);
        }

        Ok(schedule)
    }

    /// Year-end costs and the rounded record for the year just simulated.
    /// PMI is decided once, on the balance after the twelfth payment.
    fn close_year(&self, terms: &MortgageTerms, state: &mut AmortizationState, payment: f64) -> AmortizationYearRecord {
        let monthly_pmi = if state.current_ltv(terms.home_price) > self.config.pmi_ltv_threshold {
            state.remaining_balance * self.config.pmi_annual_rate / 12.0
        } else {
            0.0
        };

        // Costs use the value at the start of the year, before appreciation
        let monthly_maintenance = state.home_value * (terms.maintenance_rate_percent / 100.0) / 12.0;
        let monthly_property_tax = state.home_value * (terms.property_tax_rate_percent / 100.0) / 12.0;
        let monthly_insurance = state.home_value * (terms.insurance_rate_percent / 100.0) / 12.0;

        state.total_amount_paid +=
            (payment + monthly_pmi + monthly_maintenance + monthly_property_tax + monthly_insurance) * 12.0;

        let monthly_payment = round_cents(payment);
        let monthly_pmi = round_cents(monthly_pmi);
        let monthly_maintenance = round_cents(monthly_maintenance);
        let monthly_property_tax = round_cents(monthly_property_tax);
        let monthly_insurance = round_cents(monthly_insurance);

        AmortizationYearRecord {
            year: state.year,
            home_value: round_cents(state.home_value),
            monthly_payment,
            principal_paid: round_cents(state.yearly_principal),
            interest_paid: round_cents(state.yearly_interest),
            remaining_balance: round_cents(state.display_balance()),
            monthly_pmi,
            monthly_maintenance,
            monthly_property_tax,
            monthly_insurance,
            total_monthly_payment: monthly_payment
                + monthly_pmi
                + monthly_maintenance
                + monthly_property_tax
                + monthly_insurance,
            total_amount_paid: round_cents(state.total_amount_paid),
        }
    }
}

/// Amortize with default PMI settings
pub fn amortize(terms: &MortgageTerms) -> Result<AmortizationSchedule> {
    MortgageAmortizer::default().amortize(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn three_percent_down() -> MortgageTerms {
        MortgageTerms::new(600_000.0, 18_000.0, 30, 6.0)
    }

    #[test]
    fn test_monthly_payment() {
        let payment = monthly_payment(582_000.0, 6.0, 30).unwrap();
        assert_abs_diff_eq!(payment, 3489.384056, epsilon = 1e-5);
    }

    #[test]
    fn test_first_year_record() {
        let schedule = amortize(&three_percent_down()).unwrap();
        assert_eq!(schedule.len(), 30);

        let y1 = &schedule.years[0];
        assert_eq!(y1.year, 1);
        assert_eq!(y1.home_value, 600_000.0);
        assert_eq!(y1.monthly_payment, 3489.38);
        assert_eq!(y1.principal_paid, 7147.03);
        assert_eq!(y1.interest_paid, 34725.58);
        assert_eq!(y1.remaining_balance, 574852.97);
        assert_eq!(y1.monthly_pmi, 239.52);
        assert_eq!(y1.monthly_maintenance, 500.0);
        assert_eq!(y1.monthly_property_tax, 450.0);
        assert_eq!(y1.monthly_insurance, 150.0);
        assert_abs_diff_eq!(y1.total_monthly_payment, 4828.90, epsilon = 1e-9);
        // Cumulative total uses unrounded components
        assert_eq!(y1.total_amount_paid, 57946.87);
    }

    #[test]
    fn test_costs_use_start_of_year_value() {
        let schedule = amortize(&three_percent_down()).unwrap();
        let y2 = &schedule.years[1];
        assert_eq!(y2.home_value, 630_000.0);
        assert_eq!(y2.monthly_maintenance, 525.0);
        assert_eq!(y2.monthly_property_tax, 472.5);
        assert_eq!(y2.monthly_insurance, 157.5);
        assert_eq!(schedule.years[29].home_value, 2_469_681.36);
    }

    #[test]
    fn test_pmi_drops_once_ltv_reaches_80() {
        let schedule = amortize(&three_percent_down()).unwrap();

        for record in &schedule.years[..10] {
            assert!(record.monthly_pmi > 0.0, "year {} should carry PMI", record.year);
        }
        for record in &schedule.years[10..] {
            assert_eq!(record.monthly_pmi, 0.0, "year {} should not carry PMI", record.year);
        }
        assert_eq!(schedule.last_pmi_year(), Some(10));
    }

    #[test]
    fn test_no_pmi_with_twenty_percent_down() {
        let terms = MortgageTerms::with_down_payment_fraction(600_000.0, 0.20, 30, 6.0);
        let schedule = amortize(&terms).unwrap();
        assert_eq!(schedule.last_pmi_year(), None);
    }

    #[test]
    fn test_final_balance_is_zero() {
        let schedule = amortize(&three_percent_down()).unwrap();
        let last = schedule.years.last().unwrap();
        assert_eq!(last.remaining_balance, 0.0);
        assert_eq!(last.principal_paid, 40542.92);
        assert_eq!(last.total_amount_paid, 2_159_892.96);
    }

    #[test]
    fn test_custom_pmi_threshold() {
        let amortizer = MortgageAmortizer::new(AmortizationConfig {
            pmi_annual_rate: 0.01,
            pmi_ltv_threshold: 90.0,
        });
        let schedule = amortizer.amortize(&three_percent_down()).unwrap();
        let y1 = &schedule.years[0];
        assert_eq!(y1.monthly_pmi, round_cents(574852.971834549 * 0.01 / 12.0));
        // 90% LTV is crossed well before the default 80% cutoff
        assert!(schedule.last_pmi_year().unwrap() < 10);
    }

    #[test]
    fn test_invalid_rate() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut terms = three_percent_down();
            terms.annual_interest_rate_percent = rate;
            let err = amortize(&terms).unwrap_err();
            assert!(matches!(err, AnalysisError::InvalidRate { .. }));
        }
    }

    #[test]
    fn test_amortize_is_deterministic() {
        let terms = three_percent_down();
        let a = amortize(&terms).unwrap();
        let b = amortize(&terms).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_summary() {
        let schedule = amortize(&three_percent_down()).unwrap();
        let summary = schedule.summary();
        assert_eq!(summary.total_years, 30);
        assert_abs_diff_eq!(summary.total_principal, 582_000.0, epsilon = 1.0);
        assert_eq!(summary.final_home_value, 2_469_681.36);
        assert_abs_diff_eq!(summary.total_appreciation, 1_869_681.36, epsilon = 1e-6);
        assert!(summary.total_pmi > 0.0);
        assert!(summary.total_interest > summary.total_principal);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_principal_repays_loan(
            price in 100_000u32..2_000_000,
            down_pct in 0u32..60,
            term in 1u32..41,
            rate_bp in 50u32..1500,
        ) {
            let price = price as f64;
            let terms = MortgageTerms::new(price, price * down_pct as f64 / 100.0, term, rate_bp as f64 / 100.0);
            let schedule = amortize(&terms).unwrap();
            prop_assert_eq!(schedule.len(), term as usize);

            let principal: f64 = schedule.years.iter().map(|r| r.principal_paid).sum();
            let tolerance = term as f64 * 0.01 * 12.0;
            prop_assert!((principal - terms.loan_amount()).abs() <= tolerance);
            prop_assert_eq!(schedule.years.last().unwrap().remaining_balance, 0.0);
        }

        #[test]
        fn prop_total_monthly_payment_is_sum_of_components(
            price in 100_000u32..2_000_000,
            down_pct in 0u32..60,
            rate_bp in 50u32..1500,
        ) {
            let price = price as f64;
            let terms = MortgageTerms::new(price, price * down_pct as f64 / 100.0, 30, rate_bp as f64 / 100.0);
            let schedule = amortize(&terms).unwrap();
            for r in &schedule.years {
                let sum = r.monthly_payment + r.monthly_pmi + r.monthly_maintenance
                    + r.monthly_property_tax + r.monthly_insurance;
                prop_assert_eq!(r.total_monthly_payment, sum);
            }
        }
    }
}
