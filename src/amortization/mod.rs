//! Mortgage amortization engine

mod state;
mod engine;
mod schedule;

pub use state::AmortizationState;
pub use engine::{amortize, monthly_payment, AmortizationConfig, MortgageAmortizer};
pub use schedule::{AmortizationSchedule, AmortizationYearRecord, ScheduleSummary};
