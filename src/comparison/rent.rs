//! Rent schedule with a fixed annual escalation

use crate::rounding::round_to;
use serde::{Deserialize, Serialize};

/// Year-aligned rent figures, each rounded to one decimal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentProjection {
    /// Rent paid in each year
    pub paid_rent: Vec<f64>,
    /// Cumulative rent through each year
    pub total_rent: Vec<f64>,
    /// Monthly rent in each year
    pub monthly_rent: Vec<f64>,
}

impl RentProjection {
    pub fn len(&self) -> usize {
        self.paid_rent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paid_rent.is_empty()
    }
}

/// Project `years` of rent starting from `annual_rent_year1`.
///
/// The running total accumulates unrounded rent; only the recorded values
/// are rounded.
pub fn project_rent(annual_rent_year1: f64, years: u32, annual_increase_rate: f64) -> RentProjection {
    let capacity = years as usize;
    let mut projection = RentProjection {
        paid_rent: Vec::with_capacity(capacity),
        total_rent: Vec::with_capacity(capacity),
        monthly_rent: Vec::with_capacity(capacity),
    };

    let mut rent = annual_rent_year1;
    let mut total = 0.0;
    for _ in 0..years {
        total += rent;
        projection.paid_rent.push(round_to(rent, 1));
        projection.total_rent.push(round_to(total, 1));
        projection.monthly_rent.push(round_to(rent / 12.0, 1));
        rent *= 1.0 + annual_increase_rate;
    }

    projection
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn test_first_years() {
        let p = project_rent(30_000.0, 3, 0.03);
        assert_eq!(p.paid_rent, vec![30_000.0, 30_900.0, 31_827.0]);
        assert_eq!(p.total_rent, vec![30_000.0, 60_900.0, 92_727.0]);
        assert_eq!(p.monthly_rent, vec![2500.0, 2575.0, 2652.2]);
    }

    #[test]
    fn test_zero_years() {
        let p = project_rent(30_000.0, 0, 0.03);
        assert!(p.is_empty());
        assert!(p.total_rent.is_empty());
        assert!(p.monthly_rent.is_empty());
    }

    #[test]
    fn test_flat_rent() {
        let p = project_rent(24_000.0, 5, 0.0);
        assert!(p.paid_rent.iter().all(|&r| r == 24_000.0));
        assert_eq!(*p.total_rent.last().unwrap(), 120_000.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_lengths_and_monthly_alignment(
            monthly in 500u32..10_000,
            years in 0u32..50,
            increase_bp in 0u32..1000,
        ) {
            let p = project_rent(monthly as f64 * 12.0, years, increase_bp as f64 / 10_000.0);
            prop_assert_eq!(p.paid_rent.len(), years as usize);
            prop_assert_eq!(p.total_rent.len(), years as usize);
            prop_assert_eq!(p.monthly_rent.len(), years as usize);

            // Monthly rent derives from the unrounded annual figure
            let mut rent = monthly as f64 * 12.0;
            for i in 0..years as usize {
                prop_assert_eq!(p.monthly_rent[i], round_to(rent / 12.0, 1));
                rent *= 1.0 + increase_bp as f64 / 10_000.0;
            }
            for pair in p.total_rent.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
            }
        }
    }
}
