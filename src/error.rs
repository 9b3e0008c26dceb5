//! Error types shared across the analysis modules

use thiserror::Error;

/// Errors that can occur while running an analysis or loading its inputs
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Annual interest rate is zero, negative or not finite.
    /// The annuity payment formula divides by `(1+r)^n - 1`, which is zero at r = 0.
    #[error("invalid annual interest rate {rate}%: must be finite and greater than zero")]
    InvalidRate { rate: f64 },

    /// Custom tax bracket table is empty or not strictly ascending
    #[error("invalid tax bracket table: {0}")]
    InvalidBrackets(String),

    /// Unparseable value in an assumptions file
    #[error("invalid assumption {key}: {value}")]
    InvalidAssumption { key: String, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
