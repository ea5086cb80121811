//! CSV export for schedules and comparison tables
//!
//! Column names here are the contract the downstream rendering layer
//! depends on. Money is rounded to cents at this boundary; the engine's
//! internal values stay unrounded.

use crate::comparison::ComparisonRow;
use crate::schedule::{round_cents, AmortizationRow};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write an amortization schedule as CSV
pub fn write_amortization<W: Write>(writer: W, schedule: &[AmortizationRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "month",
        "payment_date",
        "payment",
        "principal_portion",
        "interest_portion",
        "remaining_balance",
        "cumulative_interest",
        "cumulative_principal",
    ])?;

    for row in schedule {
        csv.write_record([
            row.month.to_string(),
            row.payment_date.to_string(),
            format!("{:.2}", round_cents(row.payment)),
            format!("{:.2}", round_cents(row.principal_portion)),
            format!("{:.2}", round_cents(row.interest_portion)),
            format!("{:.2}", round_cents(row.remaining_balance)),
            format!("{:.2}", round_cents(row.cumulative_interest)),
            format!("{:.2}", round_cents(row.cumulative_principal)),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write an amortization schedule to a CSV file
pub fn write_amortization_file<P: AsRef<Path>>(
    path: P,
    schedule: &[AmortizationRow],
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_amortization(file, schedule)
}

/// Write a comparison table as CSV
pub fn write_comparison<W: Write>(writer: W, rows: &[ComparisonRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "name",
        "principal",
        "annual_rate",
        "years",
        "monthly_payment",
        "total_interest",
        "total_paid",
    ])?;

    for row in rows {
        csv.write_record([
            row.name.clone(),
            format!("{:.2}", round_cents(row.principal)),
            row.annual_rate.to_string(),
            row.years.to_string(),
            format!("{:.2}", round_cents(row.monthly_payment)),
            format!("{:.2}", round_cents(row.total_interest)),
            format!("{:.2}", round_cents(row.total_paid)),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write a comparison table to a CSV file
pub fn write_comparison_file<P: AsRef<Path>>(path: P, rows: &[ComparisonRow]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_comparison(file, rows)
}

/// File-name-safe version of a loan label ("30-Year @ 6.5%" -> "30-Year_at_6.5pct")
pub fn safe_file_name(label: &str) -> String {
    label
        .replace(' ', "_")
        .replace('@', "at")
        .replace('%', "pct")
        .replace('/', "-")
}
