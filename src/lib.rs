//! Rent vs Buy - Mortgage amortization and opportunity cost projections
//!
//! This library provides:
//! - Year-by-year amortization of fixed-rate mortgages with PMI, maintenance,
//!   property tax, insurance and home appreciation
//! - Rent projections with annual escalation
//! - Opportunity cost of buying (invested down payment and cost differences)
//! - Progressive income tax calculations
//! - Batch scenario runs, home price sweeps and down payment comparisons

pub mod error;
pub mod rounding;
pub mod terms;
pub mod assumptions;
pub mod amortization;
pub mod comparison;
pub mod tax;
pub mod scenario;

// Re-export commonly used types
pub use error::{AnalysisError, Result};
pub use terms::{MortgageTerms, RentTerms, Scenario};
pub use assumptions::Assumptions;
pub use amortization::{amortize, AmortizationSchedule, AmortizationYearRecord, MortgageAmortizer};
pub use comparison::{accumulate_savings, compare, project_rent, ComparisonRow, ComparisonTable, RentComparison};
pub use tax::{calculate_tax, TaxBreakdown};
pub use scenario::ScenarioRunner;
