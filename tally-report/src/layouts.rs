//! Body layouts for each utility's report

use crate::report::{format_float, Report};
use chrono::NaiveDateTime;
use tally_core::{SalesTotal, Summary, WordCounts};

/// Rule width of the sales report
pub const SALES_RULE_WIDTH: usize = 44;

/// Shown for a statistic that has no value
pub const NOT_AVAILABLE: &str = "#N/A";

/// One row of the number conversion table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRow {
    pub decimal: String,
    pub binary: String,
    pub hex: String,
}

pub fn conversion_report(
    executed_at: NaiveDateTime,
    source: &str,
    rows: &[ConversionRow],
) -> Report {
    let mut report = Report::new(executed_at);
    report
        .line(source)
        .line(format!("Count: {}", rows.len()))
        .line("NUMBER\tDEC\tBIN\tHEX");
    for (index, row) in rows.iter().enumerate() {
        report.line(format!(
            "{}\t{}\t{}\t{}",
            index + 1,
            row.decimal,
            row.binary,
            row.hex
        ));
    }
    report
}

pub fn statistics_report(executed_at: NaiveDateTime, source: &str, summary: &Summary) -> Report {
    let optional = |v: Option<f64>| v.map_or_else(|| NOT_AVAILABLE.to_string(), format_float);

    let mut report = Report::new(executed_at);
    report
        .line(source)
        .line(format!("Count: {}", summary.count))
        .line(format!("Mean: {}", format_float(summary.mean)))
        .line(format!("Median: {}", format_float(summary.median)))
        .line(format!("Mode: {}", optional(summary.mode)))
        .line(format!("Standard Deviation: {}", optional(summary.std_dev)))
        .line(format!("Variance: {}", format_float(summary.variance)));
    report
}

pub fn word_count_report(executed_at: NaiveDateTime, source: &str, counts: &WordCounts) -> Report {
    let mut report = Report::new(executed_at);
    report
        .line(source)
        .line(format!("Count: {}", counts.distinct()))
        .line("Row labels\tCount");
    for (word, count) in counts.sorted() {
        report.line(format!("{word}\t{count}"));
    }
    report
}

pub fn sales_report(
    executed_at: NaiveDateTime,
    catalogue_source: &str,
    sales_source: &str,
    total: &SalesTotal,
) -> Report {
    let mut report = Report::with_rule_width(executed_at, SALES_RULE_WIDTH);
    report
        .line(format!("Product list file: {catalogue_source}"))
        .line(format!("Sales file: {sales_source}"))
        .line(format!("Total: {:.2}", total.total));
    report
}
