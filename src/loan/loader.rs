//! Load loan presets from sample_loans.json

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named rate/term preset from the sample data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleLoan {
    pub name: String,
    pub principal: f64,
    pub annual_rate: f64,
    pub years: u32,
}

/// Sample-data document: purchase context plus loan presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    #[serde(default)]
    pub home_price: Option<f64>,

    #[serde(default)]
    pub down_payment: Option<f64>,

    pub sample_loans: Vec<SampleLoan>,
}

impl SampleData {
    /// Loan amount implied by the purchase context, if both fields present
    pub fn loan_amount(&self) -> Option<f64> {
        match (self.home_price, self.down_payment) {
            (Some(price), Some(down)) => Some(price - down),
            _ => None,
        }
    }
}

/// Load sample data from a JSON file
pub fn load_sample_data<P: AsRef<Path>>(path: P) -> Result<SampleData> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sample data from {}", path.display()))?;

    let data: SampleData = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse sample data in {}", path.display()))?;

    info!(
        "loaded {} loan presets from {}",
        data.sample_loans.len(),
        path.display()
    );
    Ok(data)
}

/// Load sample data from the default location
pub fn load_default_samples() -> Result<SampleData> {
    load_sample_data("data/sample_loans.json")
}
