//! Opportunity cost of buying: what the renter would hold if the yearly
//! cost difference and the down payment had been invested instead.

use crate::rounding::round_cents;

/// Compounding savings balance for each year.
///
/// The seed is `differences[0] + down_payment * (1 + market_return)` and is
/// stored unrounded as the first entry. Every later entry grows the previous
/// balance by one year of return and adds the *previous* year's difference
/// (`differences[0..n-1]`), rounded to cents. The output has the same length
/// as the input; an empty input yields an empty output.
pub fn accumulate_savings(differences: &[f64], down_payment: f64, market_return: f64) -> Vec<f64> {
    let Some(&first) = differences.first() else {
        return Vec::new();
    };

    let mut balance = first + down_payment * (1.0 + market_return);
    let mut savings = Vec::with_capacity(differences.len());
    savings.push(balance);

    for &difference in &differences[..differences.len() - 1] {
        balance = balance * (1.0 + market_return) + difference;
        savings.push(round_cents(balance));
    }

    savings
}

/// Value of `principal` after `years` of annual compounding at `rate`
pub fn compound_interest(principal: f64, rate: f64, years: u32) -> f64 {
    principal * (1.0 + rate).powf(f64::from(years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert_eq, proptest};

    #[test]
    fn test_seed_is_unrounded() {
        let savings = accumulate_savings(&[1000.123, 2000.0], 10_000.0, 0.08);
        assert_eq!(savings[0], 1000.123 + 10_000.0 * 1.08);
    }

    #[test]
    fn test_each_step_adds_previous_difference() {
        let diffs = [1000.0, 2000.0, 3000.0];
        let savings = accumulate_savings(&diffs, 10_000.0, 0.10);

        let seed = 1000.0 + 10_000.0 * 1.1;
        assert_eq!(savings.len(), 3);
        assert_eq!(savings[0], seed);
        // First step re-adds differences[0], the last difference is never consumed
        let second = seed * 1.1 + 1000.0;
        assert_eq!(savings[1], round_cents(second));
        assert_eq!(savings[2], round_cents(second * 1.1 + 2000.0));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(accumulate_savings(&[], 10_000.0, 0.08).is_empty());
        assert_eq!(accumulate_savings(&[500.0], 1000.0, 0.0), vec![1500.0]);
    }

    #[test]
    fn test_compound_interest() {
        assert_relative_eq!(compound_interest(42_000.0, 0.08, 10), 90_674.85, max_relative = 1e-6);
        assert_eq!(compound_interest(1000.0, 0.05, 0), 1000.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_length_and_seed(
            diffs in proptest::collection::vec(-50_000i32..50_000, 1..40),
            down in 0u32..200_000,
            return_bp in 0u32..1500,
        ) {
            let diffs: Vec<f64> = diffs.into_iter().map(f64::from).collect();
            let r = return_bp as f64 / 10_000.0;
            let savings = accumulate_savings(&diffs, down as f64, r);
            prop_assert_eq!(savings.len(), diffs.len());
            prop_assert_eq!(savings[0], diffs[0] + down as f64 * (1.0 + r));
        }
    }
}
