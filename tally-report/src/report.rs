//! Report builder
//!
//! Every report has the same frame:
//!
//! ```text
//! ---------------------------------------------------
//! Execution: 2026-10-19 09:30:00
//! <body lines>
//! Elapsed Time: 0.000123 seconds
//! ```

use chrono::NaiveDateTime;
use std::time::Duration;

/// Width of the rule line used by most reports
pub const DEFAULT_RULE_WIDTH: usize = 51;

/// Timestamp layout of the `Execution:` line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    rule_width: usize,
    executed_at: NaiveDateTime,
    lines: Vec<String>,
}

impl Report {
    pub fn new(executed_at: NaiveDateTime) -> Self {
        Self::with_rule_width(executed_at, DEFAULT_RULE_WIDTH)
    }

    pub fn with_rule_width(executed_at: NaiveDateTime, rule_width: usize) -> Self {
        Self {
            rule_width,
            executed_at,
            lines: Vec::new(),
        }
    }

    /// Append a body line
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the framed report, closing with the elapsed time
    pub fn render(&self, elapsed: Duration) -> String {
        let mut out = String::new();
        out.push_str(&"-".repeat(self.rule_width));
        out.push('\n');
        out.push_str(&format!(
            "Execution: {}\n",
            self.executed_at.format(TIMESTAMP_FORMAT)
        ));
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!(
            "Elapsed Time: {} seconds\n",
            format_float(elapsed.as_secs_f64())
        ));
        out
    }
}

/// Render a float the way a scientific calculator prints it:
/// whole numbers keep a trailing `.0`, and very large or very small
/// magnitudes switch to exponent form (`1e+16`, `1e-05`).
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = x.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", x);
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exp.abs());
            }
        }
        return sci;
    }

    let plain = x.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}
