//! Batch scenario runner
//!
//! Applies the sample-data loan presets across a set of home-buying
//! scenarios and reports monthly payments, total interest, and best
//! options for each. Scenarios are evaluated in parallel.
//!
//! Usage: cargo run --bin run_scenarios

use anyhow::Result;
use mortgage_system::loan::load_default_samples;
use mortgage_system::schedule::round_cents;
use mortgage_system::{LoanComparison, RankingCriterion, Scenario, ScenarioRunner};
use rayon::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("Mortgage Calculator - Scenario Comparison");
    println!("{}", "=".repeat(60));

    let samples = load_default_samples()?;
    let runner = ScenarioRunner::new(samples.sample_loans);

    let scenarios = vec![
        Scenario::new("First-time buyer (20% down)", 300_000.0, 60_000.0),
        Scenario::new("Move-up buyer (20% down)", 500_000.0, 100_000.0),
        Scenario::new("Luxury buyer (20% down)", 750_000.0, 150_000.0),
        Scenario::new("Low down payment (10% down)", 400_000.0, 40_000.0),
        Scenario::new("High down payment (30% down)", 400_000.0, 120_000.0),
    ];

    let results: Vec<(Scenario, Result<LoanComparison, _>)> = scenarios
        .into_par_iter()
        .map(|scenario| {
            let comparison = runner.run(&scenario);
            (scenario, comparison)
        })
        .collect();

    for (scenario, comparison) in results {
        println!("\n{}", "=".repeat(60));
        println!("SCENARIO: {}", scenario.name);
        println!("{}", "=".repeat(60));
        println!("Home Price: ${:.0}", scenario.home_price);
        println!(
            "Down Payment: ${:.0} ({:.1}%)",
            scenario.down_payment,
            scenario.down_payment_pct()
        );
        println!("Loan Amount: ${:.0}", scenario.loan_amount());

        let comparison = comparison?;

        println!("\nMonthly Payments:");
        for row in comparison.compare_loans() {
            println!("  {}: ${:.2}", row.name, round_cents(row.monthly_payment));
        }

        println!("\nTotal Interest:");
        for row in comparison.compare_loans() {
            println!("  {}: ${:.2}", row.name, round_cents(row.total_interest));
        }

        println!("\nTotal Cost (including down payment):");
        for row in comparison.compare_loans() {
            println!(
                "  {}: ${:.2}",
                row.name,
                round_cents(scenario.down_payment + row.total_paid)
            );
        }

        let best_payment = comparison.best_by(RankingCriterion::LowestMonthlyPayment)?;
        let best_cost = comparison.best_by(RankingCriterion::LowestTotalCost)?;

        println!("\nBest Options:");
        println!(
            "  Lowest monthly payment: {} (${:.2})",
            best_payment.terms().name,
            round_cents(best_payment.monthly_payment())
        );
        println!(
            "  Lowest total cost: {} (${:.2})",
            best_cost.terms().name,
            round_cents(scenario.down_payment + best_cost.summary().total_paid)
        );
    }

    Ok(())
}
