//! Mortgage System - amortization engine with multi-loan comparison
//!
//! This library provides:
//! - Fixed-rate monthly payment calculation (closed form, exact 0% handling)
//! - Full month-by-month amortization schedules with an exact zero payoff
//! - Per-loan summaries (payment, total paid, total interest, payoff month)
//! - Stable multi-loan comparison with best-by-criterion ranking
//! - Scenario batches over home price / down payment presets
//! - CSV export of schedules and comparison tables

pub mod comparison;
pub mod error;
pub mod export;
pub mod loan;
pub mod scenario;
pub mod schedule;

// Re-export commonly used types
pub use comparison::{ComparisonRow, LoanComparison, RankingCriterion};
pub use error::MortgageError;
pub use loan::{LoanTerms, SampleData, SampleLoan};
pub use scenario::{Scenario, ScenarioRunner};
pub use schedule::{monthly_payment, AmortizationRow, LoanEngine, LoanSummary, YearEndBalance};
