//! Payment engine: closed-form monthly payment and full amortization
//!
//! Pure numeric transformation from loan terms to a payment schedule and
//! summary. No I/O, no logging; errors surface to the caller.

use super::table::{AmortizationRow, LoanSummary, YearEndBalance};
use crate::error::MortgageError;
use crate::loan::LoanTerms;
use std::sync::OnceLock;

/// Compute the fixed monthly payment for a loan
///
/// Uses the standard mortgage formula `P * r(1+r)^n / ((1+r)^n - 1)` with
/// `r` the monthly rate and `n` the number of payments. A 0% loan pays
/// `P / n` exactly, avoiding the division by zero in the closed form.
///
/// The result is unrounded; apply [`round_cents`](super::round_cents) at
/// the point of reporting.
pub fn monthly_payment(
    principal: f64,
    annual_rate: f64,
    years: u32,
) -> Result<f64, MortgageError> {
    let terms = LoanTerms::unnamed(principal, annual_rate, years)?;
    Ok(payment_for(&terms))
}

fn payment_for(terms: &LoanTerms) -> f64 {
    let r = terms.monthly_rate();
    let n = terms.num_payments();

    if r == 0.0 {
        return terms.principal / n as f64;
    }

    let growth = (1.0 + r).powi(n as i32);
    terms.principal * (r * growth) / (growth - 1.0)
}

/// Amortization engine for a single loan
///
/// Holds validated terms and caches the schedule and summary after first
/// computation, so the same terms instance is never recomputed. Re-invoking
/// with identical terms reproduces an identical sequence.
#[derive(Debug, Clone)]
pub struct LoanEngine {
    terms: LoanTerms,
    monthly_payment: f64,
    schedule: OnceLock<Vec<AmortizationRow>>,
    summary: OnceLock<LoanSummary>,
}

impl LoanEngine {
    /// Create an engine from already-validated terms
    pub fn new(terms: LoanTerms) -> Self {
        let monthly_payment = payment_for(&terms);
        Self {
            terms,
            monthly_payment,
            schedule: OnceLock::new(),
            summary: OnceLock::new(),
        }
    }

    /// Validate and create an engine in one step
    pub fn from_parts(
        principal: f64,
        annual_rate: f64,
        years: u32,
        name: Option<&str>,
    ) -> Result<Self, MortgageError> {
        let terms = match name {
            Some(name) => LoanTerms::new(principal, annual_rate, years, name)?,
            None => LoanTerms::unnamed(principal, annual_rate, years)?,
        };
        Ok(Self::new(terms))
    }

    /// The loan terms this engine projects
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Fixed monthly payment, unrounded
    pub fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    /// Full amortization schedule, one row per month
    ///
    /// Generated on first call and cached. The final month's principal
    /// portion is set to the exact remaining balance (payment adjusted
    /// correspondingly) so the ending balance is exactly 0.0 despite
    /// floating-point drift accumulated over up to 600 iterations.
    pub fn schedule(&self) -> &[AmortizationRow] {
        self.schedule.get_or_init(|| self.generate_schedule())
    }

    fn generate_schedule(&self) -> Vec<AmortizationRow> {
        let n = self.terms.num_payments();
        let monthly_rate = self.terms.monthly_rate();

        let mut rows = Vec::with_capacity(n as usize);
        let mut balance = self.terms.principal;
        let mut cumulative_interest = 0.0;

        for month in 1..=n {
            let interest = balance * monthly_rate;

            // Final month: retire the exact remaining balance
            let (payment, principal_portion) = if month == n {
                (balance + interest, balance)
            } else {
                (self.monthly_payment, self.monthly_payment - interest)
            };

            balance -= principal_portion;
            cumulative_interest += interest;

            rows.push(AmortizationRow {
                month,
                payment_date: self.terms.payment_date(month),
                payment,
                principal_portion,
                interest_portion: interest,
                remaining_balance: balance,
                cumulative_interest,
                cumulative_principal: self.terms.principal - balance,
            });
        }

        rows
    }

    /// Summary statistics, computed once from the full schedule
    pub fn summary(&self) -> &LoanSummary {
        self.summary.get_or_init(|| {
            let schedule = self.schedule();
            let total_paid: f64 = schedule.iter().map(|r| r.payment).sum();
            let total_interest = total_paid - self.terms.principal;

            LoanSummary {
                name: self.terms.name.clone(),
                principal: self.terms.principal,
                annual_rate: self.terms.annual_rate,
                years: self.terms.years,
                monthly_payment: self.monthly_payment,
                num_payments: self.terms.num_payments(),
                total_paid,
                total_interest,
                payoff_month: self.terms.num_payments(),
                interest_percentage: (total_interest / total_paid) * 100.0,
            }
        })
    }

    /// Remaining balance at the end of each loan year
    pub fn year_end_balances(&self) -> Vec<YearEndBalance> {
        let schedule = self.schedule();

        (1..=self.terms.years)
            .filter_map(|year| {
                let idx = (year * 12 - 1) as usize;
                schedule.get(idx).map(|row| YearEndBalance {
                    year,
                    remaining_balance: row.remaining_balance,
                    cumulative_interest: row.cumulative_interest,
                    cumulative_principal: row.cumulative_principal,
                })
            })
            .collect()
    }
}
