//! Progressive income tax, independent of the mortgage projections

mod brackets;
mod calculator;

pub use brackets::{TaxBracket, TaxBracketTable};
pub use calculator::{calculate_tax, project_lifetime_income, LifetimeIncome, TaxBreakdown, TaxCalculator};
