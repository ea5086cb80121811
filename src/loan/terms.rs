//! Loan terms matching the sample-data input format

use crate::error::MortgageError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Terms of a fixed-rate, fixed-term loan
///
/// Immutable once constructed. The constructor enforces positivity of
/// principal and term and a non-negative rate; range policy (rate <= 100%,
/// term 1-50 years) is the input layer's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Loan amount in currency units
    pub principal: f64,

    /// Annual interest rate as a fraction (0.065 = 6.5%), not a percentage
    pub annual_rate: f64,

    /// Loan term in years
    pub years: u32,

    /// Display label for comparison output
    pub name: String,

    /// Start date of the loan, used to stamp payment dates on the schedule
    pub start_date: NaiveDate,
}

impl LoanTerms {
    /// Create loan terms with an explicit display label
    pub fn new(
        principal: f64,
        annual_rate: f64,
        years: u32,
        name: impl Into<String>,
    ) -> Result<Self, MortgageError> {
        Self::with_start_date(principal, annual_rate, years, name, default_start_date())
    }

    /// Create loan terms with a generated `"{years}-Year @ {rate}%"` label
    pub fn unnamed(principal: f64, annual_rate: f64, years: u32) -> Result<Self, MortgageError> {
        let name = generated_label(annual_rate, years);
        Self::new(principal, annual_rate, years, name)
    }

    /// Create loan terms with an explicit start date
    pub fn with_start_date(
        principal: f64,
        annual_rate: f64,
        years: u32,
        name: impl Into<String>,
        start_date: NaiveDate,
    ) -> Result<Self, MortgageError> {
        if principal <= 0.0 {
            return Err(MortgageError::InvalidTerms(format!(
                "principal must be positive, got {}",
                principal
            )));
        }
        if years == 0 {
            return Err(MortgageError::InvalidTerms(
                "term must be at least 1 year".into(),
            ));
        }
        if annual_rate < 0.0 {
            return Err(MortgageError::InvalidTerms(format!(
                "annual rate must be non-negative, got {}",
                annual_rate
            )));
        }

        Ok(Self {
            principal,
            annual_rate,
            years,
            name: name.into(),
            start_date,
        })
    }

    /// Monthly interest rate (annual rate / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Total number of monthly payments over the term
    pub fn num_payments(&self) -> u32 {
        self.years * 12
    }

    /// Payment date for a 1-based month index
    ///
    /// Approximated as start date + 30 days per month, matching the
    /// exported schedule format.
    pub fn payment_date(&self, month: u32) -> NaiveDate {
        self.start_date + chrono::Duration::days(30 * month as i64)
    }
}

/// Label used when no name is supplied, e.g. "30-Year @ 6.5%"
pub fn generated_label(annual_rate: f64, years: u32) -> String {
    format!("{}-Year @ {:.1}%", years, annual_rate * 100.0)
}

fn default_start_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terms() {
        let terms = LoanTerms::new(400_000.0, 0.065, 30, "30-Year Fixed").unwrap();
        assert_eq!(terms.num_payments(), 360);
        assert!((terms.monthly_rate() - 0.065 / 12.0).abs() < 1e-15);
        assert_eq!(terms.name, "30-Year Fixed");
    }

    #[test]
    fn test_generated_label() {
        let terms = LoanTerms::unnamed(400_000.0, 0.065, 30).unwrap();
        assert_eq!(terms.name, "30-Year @ 6.5%");

        let terms = LoanTerms::unnamed(100_000.0, 0.05, 15).unwrap();
        assert_eq!(terms.name, "15-Year @ 5.0%");
    }

    #[test]
    fn test_rejects_invalid_terms() {
        assert!(LoanTerms::unnamed(0.0, 0.05, 30).is_err());
        assert!(LoanTerms::unnamed(-1000.0, 0.05, 30).is_err());
        assert!(LoanTerms::unnamed(100_000.0, 0.05, 0).is_err());
        assert!(LoanTerms::unnamed(100_000.0, -0.01, 30).is_err());

        // Zero rate is a valid loan
        assert!(LoanTerms::unnamed(100_000.0, 0.0, 10).is_ok());
    }

    #[test]
    fn test_payment_dates() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let terms = LoanTerms::with_start_date(100_000.0, 0.05, 10, "Test", start).unwrap();

        assert_eq!(terms.payment_date(1), start + chrono::Duration::days(30));
        assert_eq!(terms.payment_date(12), start + chrono::Duration::days(360));
    }
}
