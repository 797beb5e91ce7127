//! # tally-report
//!
//! Plain-text reports for the tally utilities. A [`Report`] carries the
//! common frame (rule, execution timestamp, elapsed time); the
//! [`layouts`] module fills in each utility's body; [`ResultsFile`]
//! appends the rendered text to disk.

pub mod error;
pub mod layouts;
pub mod report;
pub mod results;

pub use error::{ReportError, ReportResult};
pub use layouts::{
    conversion_report, sales_report, statistics_report, word_count_report, ConversionRow,
};
pub use report::{format_float, Report};
pub use results::ResultsFile;
