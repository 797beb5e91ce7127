//! Line-oriented numeric input
//!
//! One value per line. Blank lines are ignored and lines that do not
//! parse are skipped with a warning, so a single bad entry never aborts
//! a whole run.

use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// A line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// Trimmed line contents
    pub text: String,
}

/// Values parsed from an input, plus the lines that were skipped
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput<T> {
    pub values: Vec<T>,
    pub skipped: Vec<SkippedLine>,
}

impl<T> ParsedInput<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse one value per non-empty line of `text`
pub fn parse_values<T: FromStr>(text: &str) -> ParsedInput<T> {
    let mut values = Vec::new();
    let mut skipped = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<T>() {
            Ok(value) => values.push(value),
            Err(_) => {
                warn!(line = index + 1, "Ignoring non-numeric value in the file: {}", line);
                skipped.push(SkippedLine {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    ParsedInput { values, skipped }
}

/// Read `path` and parse one value per non-empty line
pub fn read_values<T: FromStr>(path: impl AsRef<Path>) -> CoreResult<ParsedInput<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "Read input file");
    Ok(parse_values(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_blank_lines_ignored() {
        let parsed: ParsedInput<i64> = parse_values("1\n\n  \n2\n");
        assert_eq!(parsed.values, vec![1, 2]);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_invalid_lines_skipped() {
        let parsed: ParsedInput<f64> = parse_values("1.5\nabc\n 2 \n3,5\n");
        assert_eq!(parsed.values, vec![1.5, 2.0]);
        assert_eq!(
            parsed.skipped,
            vec![
                SkippedLine { line: 2, text: "abc".to_string() },
                SkippedLine { line: 4, text: "3,5".to_string() },
            ]
        );
    }

    #[test]
    fn test_big_integers() {
        let parsed: ParsedInput<BigInt> = parse_values("-7\n99999999999999999999999999\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.values[0], BigInt::from(-7));
    }

    #[test]
    fn test_decimal_is_not_an_integer() {
        let parsed: ParsedInput<BigInt> = parse_values("1.5\n");
        assert!(parsed.is_empty());
        assert_eq!(parsed.skipped.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = read_values::<f64>("/definitely/not/here.txt");
        assert!(matches!(result, Err(CoreError::Io { .. })));
    }
}
