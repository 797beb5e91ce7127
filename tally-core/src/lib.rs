//! # tally-core
//!
//! The computations behind the tally utilities, kept free of report
//! formatting and terminal output:
//!
//! - [`input`]: one value per line, with bad lines skipped and logged
//! - [`stats`]: mean, median, mode, standard deviation and variance
//! - [`words`]: word frequency table
//! - [`sales`]: catalogue lookup and sales totals

pub mod error;
pub mod input;
pub mod sales;
pub mod stats;
pub mod words;

pub use error::{CoreError, CoreResult};
pub use input::{parse_values, read_values, ParsedInput, SkippedLine};
pub use sales::{compute_total, load_catalogue, load_sales, Catalogue, Product, SaleRecord, SalesTotal};
pub use stats::Summary;
pub use words::WordCounts;
