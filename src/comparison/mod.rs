//! Rent-vs-buy comparison: rent schedule, invested savings and the combined table

mod rent;
mod savings;
mod table;

pub use rent::{project_rent, RentProjection};
pub use savings::{accumulate_savings, compound_interest};
pub use table::{compare, ComparisonRow, ComparisonSummary, ComparisonTable, RentComparison};
