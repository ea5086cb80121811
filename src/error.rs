//! Error taxonomy for the mortgage engine
//!
//! The engine and aggregator surface errors to their caller; they do not
//! log, retry, or substitute defaults.

use thiserror::Error;

/// Errors produced by the payment engine and comparison aggregator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MortgageError {
    /// Loan terms rejected at construction: principal <= 0, years == 0,
    /// or a negative annual rate
    #[error("invalid loan terms: {0}")]
    InvalidTerms(String),

    /// A ranking was requested on a comparison holding zero loans
    #[error("comparison holds no loans")]
    EmptyComparison,
}
