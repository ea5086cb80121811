//! Scenario runner for batch home-buying comparisons
//!
//! Pre-loads the rate/term presets once, then builds a loan comparison for
//! any home price / down payment combination without re-reading the
//! sample-data file.

use crate::comparison::LoanComparison;
use crate::error::MortgageError;
use crate::loan::SampleLoan;

/// A home-buying scenario: purchase price and cash down
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub home_price: f64,
    pub down_payment: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, home_price: f64, down_payment: f64) -> Self {
        Self {
            name: name.into(),
            home_price,
            down_payment,
        }
    }

    /// Amount financed
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Down payment as a percentage of home price
    pub fn down_payment_pct(&self) -> f64 {
        self.down_payment / self.home_price * 100.0
    }
}

/// Pre-loaded runner applying the same presets across many scenarios
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    presets: Vec<SampleLoan>,
}

impl ScenarioRunner {
    /// Create a runner with the given rate/term presets
    pub fn new(presets: Vec<SampleLoan>) -> Self {
        Self { presets }
    }

    /// The presets this runner applies
    pub fn presets(&self) -> &[SampleLoan] {
        &self.presets
    }

    /// Build a comparison for a scenario
    ///
    /// Each preset's rate and term are applied to the scenario's loan
    /// amount; preset principals are ignored.
    pub fn run(&self, scenario: &Scenario) -> Result<LoanComparison, MortgageError> {
        let mut comparison = LoanComparison::new();
        for preset in &self.presets {
            comparison.add_loan(
                scenario.loan_amount(),
                preset.annual_rate,
                preset.years,
                Some(&preset.name),
            )?;
        }
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::RankingCriterion;

    fn presets() -> Vec<SampleLoan> {
        vec![
            SampleLoan {
                name: "30-Year Fixed @ 6.5%".into(),
                principal: 400_000.0,
                annual_rate: 0.065,
                years: 30,
            },
            SampleLoan {
                name: "15-Year Fixed @ 5.5%".into(),
                principal: 400_000.0,
                annual_rate: 0.055,
                years: 15,
            },
        ]
    }

    #[test]
    fn test_scenario_amounts() {
        let scenario = Scenario::new("First-time buyer (20% down)", 300_000.0, 60_000.0);
        assert_eq!(scenario.loan_amount(), 240_000.0);
        assert!((scenario.down_payment_pct() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_runner_applies_presets_to_loan_amount() {
        let runner = ScenarioRunner::new(presets());
        let scenario = Scenario::new("Move-up buyer", 500_000.0, 100_000.0);

        let comparison = runner.run(&scenario).unwrap();
        assert_eq!(comparison.len(), 2);

        for row in comparison.compare_loans() {
            assert_eq!(row.principal, 400_000.0);
        }

        // Shorter term wins on total cost
        let best = comparison.best_by(RankingCriterion::LowestTotalCost).unwrap();
        assert_eq!(best.terms().name, "15-Year Fixed @ 5.5%");
    }

    #[test]
    fn test_runner_rejects_impossible_scenario() {
        let runner = ScenarioRunner::new(presets());
        // Down payment covers the whole price; nothing left to finance
        let scenario = Scenario::new("All cash", 300_000.0, 300_000.0);
        assert!(runner.run(&scenario).is_err());
    }
}
