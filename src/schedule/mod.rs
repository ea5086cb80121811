//! Amortization schedule generation and summaries

pub mod engine;
pub mod table;

pub use engine::{monthly_payment, LoanEngine};
pub use table::{round_cents, AmortizationRow, LoanSummary, YearEndBalance};
