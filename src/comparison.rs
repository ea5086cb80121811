//! Comparison aggregator for multiple loan options
//!
//! Holds an ordered collection of payment engines and derives relative
//! rankings. Row order always matches insertion order; ranking ties break
//! to the earliest-added loan.

use crate::error::MortgageError;
use crate::schedule::{AmortizationRow, LoanEngine};
use serde::{Deserialize, Serialize};

/// Criterion for selecting the best loan in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingCriterion {
    LowestMonthlyPayment,
    LowestTotalInterest,
    LowestTotalCost,
}

impl RankingCriterion {
    /// The summary field this criterion ranks on
    fn key(&self, engine: &LoanEngine) -> f64 {
        let summary = engine.summary();
        match self {
            RankingCriterion::LowestMonthlyPayment => summary.monthly_payment,
            RankingCriterion::LowestTotalInterest => summary.total_interest,
            RankingCriterion::LowestTotalCost => summary.total_paid,
        }
    }
}

/// One row of the side-by-side comparison table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    pub principal: f64,
    pub annual_rate: f64,
    pub years: u32,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
}

/// Ordered collection of loan options under comparison
///
/// Owns its member engines; duplicate names are permitted and displayed
/// separately. Not safe for concurrent mutation; callers serialize access.
#[derive(Debug, Clone, Default)]
pub struct LoanComparison {
    loans: Vec<LoanEngine>,
}

impl LoanComparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loans held
    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// The held engines, in insertion order
    pub fn loans(&self) -> &[LoanEngine] {
        &self.loans
    }

    /// Validate terms and append a loan to the comparison
    ///
    /// A generated `"{years}-Year @ {rate}%"` label is used when `name` is
    /// None. On invalid terms the collection is left unchanged.
    pub fn add_loan(
        &mut self,
        principal: f64,
        annual_rate: f64,
        years: u32,
        name: Option<&str>,
    ) -> Result<&LoanEngine, MortgageError> {
        let engine = LoanEngine::from_parts(principal, annual_rate, years, name)?;
        self.loans.push(engine);
        Ok(self.loans.last().unwrap())
    }

    /// Side-by-side comparison table, one row per loan in insertion order
    pub fn compare_loans(&self) -> Vec<ComparisonRow> {
        self.loans
            .iter()
            .map(|engine| {
                let summary = engine.summary();
                ComparisonRow {
                    name: summary.name.clone(),
                    principal: summary.principal,
                    annual_rate: summary.annual_rate,
                    years: summary.years,
                    monthly_payment: summary.monthly_payment,
                    total_interest: summary.total_interest,
                    total_paid: summary.total_paid,
                }
            })
            .collect()
    }

    /// The best loan under the given criterion
    ///
    /// Ties break to the earliest-added loan. Fails with `EmptyComparison`
    /// when no loans are held.
    pub fn best_by(&self, criterion: RankingCriterion) -> Result<&LoanEngine, MortgageError> {
        let mut best: Option<(&LoanEngine, f64)> = None;

        for engine in &self.loans {
            let key = criterion.key(engine);
            // Strict less-than keeps the first-added loan on ties
            match best {
                Some((_, best_key)) if key >= best_key => {}
                _ => best = Some((engine, key)),
            }
        }

        best.map(|(engine, _)| engine)
            .ok_or(MortgageError::EmptyComparison)
    }

    /// Every loan's schedule tagged with its label, for combined export
    pub fn combined_schedule(&self) -> Vec<(&str, &[AmortizationRow])> {
        self.loans
            .iter()
            .map(|engine| (engine.terms().name.as_str(), engine.schedule()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_comparison() -> LoanComparison {
        let mut comparison = LoanComparison::new();
        comparison
            .add_loan(500_000.0, 0.05, 15, Some("15-Year"))
            .unwrap();
        comparison
            .add_loan(500_000.0, 0.065, 30, Some("30-Year"))
            .unwrap();
        comparison
    }

    #[test]
    fn test_row_order_matches_insertion_order() {
        let mut comparison = LoanComparison::new();
        // Deliberately added most-expensive-first
        comparison.add_loan(500_000.0, 0.08, 30, Some("C")).unwrap();
        comparison.add_loan(500_000.0, 0.05, 30, Some("A")).unwrap();
        comparison.add_loan(500_000.0, 0.065, 30, Some("B")).unwrap();

        let names: Vec<_> = comparison
            .compare_loans()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_failed_add_leaves_collection_unchanged() {
        let mut comparison = sample_comparison();
        let before = comparison.len();

        assert!(comparison.add_loan(-1.0, 0.05, 30, None).is_err());
        assert_eq!(comparison.len(), before);
    }

    #[test]
    fn test_best_by_criteria() {
        let comparison = sample_comparison();

        // 30-year has the lower payment; 15-year the lower interest and cost
        let best = comparison
            .best_by(RankingCriterion::LowestMonthlyPayment)
            .unwrap();
        assert_eq!(best.terms().name, "30-Year");

        let best = comparison
            .best_by(RankingCriterion::LowestTotalInterest)
            .unwrap();
        assert_eq!(best.terms().name, "15-Year");

        let best = comparison
            .best_by(RankingCriterion::LowestTotalCost)
            .unwrap();
        assert_eq!(best.terms().name, "15-Year");
    }

    #[test]
    fn test_best_by_tie_breaks_to_first_added() {
        let mut comparison = LoanComparison::new();
        comparison
            .add_loan(300_000.0, 0.06, 30, Some("First"))
            .unwrap();
        comparison
            .add_loan(300_000.0, 0.06, 30, Some("Second"))
            .unwrap();

        let best = comparison
            .best_by(RankingCriterion::LowestMonthlyPayment)
            .unwrap();
        assert_eq!(best.terms().name, "First");
    }

    #[test]
    fn test_best_by_empty_comparison() {
        let comparison = LoanComparison::new();
        let err = comparison
            .best_by(RankingCriterion::LowestMonthlyPayment)
            .unwrap_err();
        assert_eq!(err, MortgageError::EmptyComparison);
    }

    #[test]
    fn test_duplicate_names_displayed_separately() {
        let mut comparison = LoanComparison::new();
        comparison.add_loan(200_000.0, 0.05, 30, Some("Loan")).unwrap();
        comparison.add_loan(300_000.0, 0.05, 30, Some("Loan")).unwrap();

        let rows = comparison.compare_loans();
        assert_eq!(rows.len(), 2);
        assert_relative_eq!(rows[0].principal, 200_000.0);
        assert_relative_eq!(rows[1].principal, 300_000.0);
    }

    #[test]
    fn test_combined_schedule_covers_all_loans() {
        let comparison = sample_comparison();
        let combined = comparison.combined_schedule();

        assert_eq!(combined.len(), 2);
        assert_eq!(combined[0].0, "15-Year");
        assert_eq!(combined[0].1.len(), 180);
        assert_eq!(combined[1].1.len(), 360);
    }
}
