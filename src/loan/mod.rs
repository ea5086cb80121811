//! Loan terms and sample-data loading

pub mod loader;
pub mod terms;

pub use loader::{load_default_samples, load_sample_data, SampleData, SampleLoan};
pub use terms::{generated_label, LoanTerms};
