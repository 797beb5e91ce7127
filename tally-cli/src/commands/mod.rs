//! Subcommand implementations

pub mod booking;
pub mod reports;

use anyhow::{Context, Result};
use tally_report::ResultsFile;

/// Print a rendered report and append it to its results file
pub fn publish(text: &str, results: &ResultsFile) -> Result<()> {
    println!("{text}");
    results
        .append(text)
        .with_context(|| format!("Failed to save report to {}", results.path().display()))
}
