//! Amortization output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Round a currency amount to cents
///
/// Applied at the reporting and export boundary only; schedule arithmetic
/// stays unrounded so rounding error does not compound across months.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A single month of the amortization schedule
///
/// Amounts are unrounded; callers apply [`round_cents`] when reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month index
    pub month: u32,

    /// Scheduled payment date
    pub payment_date: NaiveDate,

    /// Total payment for the month (adjusted on the final month)
    pub payment: f64,

    /// Portion of the payment applied to principal
    pub principal_portion: f64,

    /// Portion of the payment applied to interest
    pub interest_portion: f64,

    /// Balance after this payment; exactly 0.0 on the final row
    pub remaining_balance: f64,

    /// Interest paid through this month
    pub cumulative_interest: f64,

    /// Principal paid through this month
    pub cumulative_principal: f64,
}

/// Summary statistics for a loan, derived from its full schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub name: String,
    pub principal: f64,
    pub annual_rate: f64,
    pub years: u32,
    pub monthly_payment: f64,
    pub num_payments: u32,

    /// Sum of all row payments, reflecting the final-month correction
    pub total_paid: f64,

    /// total_paid - principal
    pub total_interest: f64,

    /// Month index of the final payment (always years * 12 for fixed-term)
    pub payoff_month: u32,

    /// Share of total paid that went to interest, as a percentage
    pub interest_percentage: f64,
}

/// Remaining balance snapshot at the end of a loan year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearEndBalance {
    pub year: u32,
    pub remaining_balance: f64,
    pub cumulative_interest: f64,
    pub cumulative_principal: f64,
}
