//! Report-producing utilities: convert, stats, words, sales

use super::publish;
use anyhow::{Context, Result};
use chrono::Local;
use num_bigint::BigInt;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tally_core::{compute_total, load_catalogue, load_sales, read_values, Summary, WordCounts};
use tally_radix::{OverflowPolicy, RadixEncoder};
use tally_report::results::{CONVERSION_RESULTS, SALES_RESULTS, STATISTICS_RESULTS};
use tally_report::{
    conversion_report, sales_report, statistics_report, word_count_report, ConversionRow,
    ResultsFile,
};

/// Encoder settings for the convert command
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    pub binary_width: usize,
    pub hex_width: usize,
    pub strict: bool,
}

pub fn convert_command(file: &Path, options: ConvertOptions, results_dir: &Path) -> Result<()> {
    let started = Instant::now();
    let executed_at = Local::now().naive_local();

    let policy = if options.strict {
        OverflowPolicy::Reject
    } else {
        OverflowPolicy::Extend
    };
    let binary = RadixEncoder::binary()
        .with_width(options.binary_width)
        .context("Invalid --binary-width")?
        .with_policy(policy);
    let hex = RadixEncoder::hexadecimal()
        .with_width(options.hex_width)
        .context("Invalid --hex-width")?
        .with_policy(policy);

    let parsed = read_values::<BigInt>(file)?;
    let rows = parsed
        .values
        .iter()
        .map(|value| -> Result<ConversionRow> {
            Ok(ConversionRow {
                decimal: value.to_string(),
                binary: binary.encode(value)?,
                hex: hex.encode(value)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = conversion_report(executed_at, &file.display().to_string(), &rows);
    publish(
        &report.render(started.elapsed()),
        &ResultsFile::in_dir(results_dir, CONVERSION_RESULTS),
    )
}

pub fn stats_command(file: &Path, results_dir: &Path) -> Result<()> {
    let started = Instant::now();
    let executed_at = Local::now().naive_local();

    let parsed = read_values::<f64>(file)?;
    let summary = Summary::compute(&parsed.values)
        .with_context(|| format!("No numeric data in {}", file.display()))?;

    let report = statistics_report(executed_at, &file.display().to_string(), &summary);
    publish(
        &report.render(started.elapsed()),
        &ResultsFile::in_dir(results_dir, STATISTICS_RESULTS),
    )
}

pub fn words_command(file: &Path) -> Result<()> {
    let started = Instant::now();
    let executed_at = Local::now().naive_local();

    let text = fs::read_to_string(file)
        .with_context(|| format!("Error reading file: {}", file.display()))?;
    let counts = WordCounts::from_text(&text);

    let report = word_count_report(executed_at, &file.display().to_string(), &counts);
    publish(
        &report.render(started.elapsed()),
        &ResultsFile::for_word_count(file),
    )
}

pub fn sales_command(catalogue: &Path, sales: &Path, results_dir: &Path) -> Result<()> {
    let started = Instant::now();
    let executed_at = Local::now().naive_local();

    let prices = load_catalogue(catalogue)?;
    let records = load_sales(sales)?;
    let total = compute_total(&prices, &records);
    if !total.invalid.is_empty() || !total.unmatched.is_empty() {
        tracing::warn!(
            invalid = total.invalid.len(),
            unmatched = total.unmatched.len(),
            counted = total.counted,
            "Some sale records were skipped"
        );
    }

    let report = sales_report(
        executed_at,
        &catalogue.display().to_string(),
        &sales.display().to_string(),
        &total,
    );
    publish(
        &report.render(started.elapsed()),
        &ResultsFile::in_dir(results_dir, SALES_RESULTS),
    )
}
