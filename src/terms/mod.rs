//! Scenario inputs and CSV loading

mod data;
pub mod loader;

pub use data::{
    MortgageTerms, RentTerms, Scenario, DEFAULT_HOME_APPRECIATION, DEFAULT_INSURANCE_RATE,
    DEFAULT_MAINTENANCE_RATE, DEFAULT_MONTHLY_RENT, DEFAULT_PROPERTY_TAX_RATE, DEFAULT_RENT_INCREASE,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
