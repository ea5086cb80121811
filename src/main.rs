//! Mortgage System CLI
//!
//! Compares a 15-year and a 30-year loan for a given principal, prints the
//! side-by-side table and key insights, and writes the schedules and
//! comparison summary as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use mortgage_system::export;
use mortgage_system::schedule::round_cents;
use mortgage_system::{LoanComparison, RankingCriterion};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mortgage_system", about = "Mortgage amortization calculator")]
struct Args {
    /// Loan amount
    #[arg(long, default_value_t = 500_000.0)]
    principal: f64,

    /// Directory for CSV output
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Mortgage Amortization Calculator");
    println!("================================\n");

    let mut comparison = LoanComparison::new();
    comparison
        .add_loan(args.principal, 0.05, 15, Some("15-Year @ 5.0%"))
        .context("failed to add 15-year loan")?;
    comparison
        .add_loan(args.principal, 0.065, 30, Some("30-Year @ 6.5%"))
        .context("failed to add 30-year loan")?;

    // Side-by-side summary
    println!("LOAN COMPARISON SUMMARY");
    println!("{}", "=".repeat(72));
    println!(
        "{:<18} {:>14} {:>16} {:>16}",
        "Loan", "Monthly", "Total Interest", "Total Paid"
    );
    println!("{}", "-".repeat(72));
    for row in comparison.compare_loans() {
        println!(
            "{:<18} {:>14.2} {:>16.2} {:>16.2}",
            row.name,
            round_cents(row.monthly_payment),
            round_cents(row.total_interest),
            round_cents(row.total_paid),
        );
    }

    // First months of each schedule
    for engine in comparison.loans() {
        println!("\nFirst 3 months of {}:", engine.terms().name);
        println!(
            "{:>5} {:>12} {:>12} {:>12} {:>16}",
            "Month", "Payment", "Principal", "Interest", "Balance"
        );
        for row in engine.schedule().iter().take(3) {
            println!(
                "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>16.2}",
                row.month,
                round_cents(row.payment),
                round_cents(row.principal_portion),
                round_cents(row.interest_portion),
                round_cents(row.remaining_balance),
            );
        }
    }

    // Key insights
    let loans = comparison.loans();
    let (short, long) = (loans[0].summary(), loans[1].summary());
    let monthly_diff = short.monthly_payment - long.monthly_payment;
    let interest_savings = long.total_interest - short.total_interest;

    println!("\nKey Insights:");
    println!(
        "  15-year loan costs ${:.2} more per month",
        round_cents(monthly_diff)
    );
    println!(
        "  15-year loan saves ${:.2} in total interest ({:.1}%)",
        round_cents(interest_savings),
        interest_savings / long.total_interest * 100.0
    );

    println!("\nBest Options:");
    for (label, criterion) in [
        ("Lowest monthly payment", RankingCriterion::LowestMonthlyPayment),
        ("Lowest total interest", RankingCriterion::LowestTotalInterest),
        ("Lowest total cost", RankingCriterion::LowestTotalCost),
    ] {
        let best = comparison.best_by(criterion)?;
        println!("  {}: {}", label, best.terms().name);
    }

    // CSV output
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;

    for engine in comparison.loans() {
        let file_name = format!(
            "{}_amortization.csv",
            export::safe_file_name(&engine.terms().name)
        );
        let path = args.output_dir.join(file_name);
        export::write_amortization_file(&path, engine.schedule())?;
        println!("\nSchedule written to: {}", path.display());
    }

    let comparison_path = args.output_dir.join("loan_comparison.csv");
    export::write_comparison_file(&comparison_path, &comparison.compare_loans())?;
    println!("Comparison written to: {}", comparison_path.display());

    Ok(())
}
