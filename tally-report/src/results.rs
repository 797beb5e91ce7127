//! Results files
//!
//! Reports are appended, never overwritten, so a results file keeps the
//! history of every run.

use crate::error::{ReportError, ReportResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONVERSION_RESULTS: &str = "ConvertionResults.txt";
pub const STATISTICS_RESULTS: &str = "StatisticsResults.txt";
pub const SALES_RESULTS: &str = "SalesResults.txt";
pub const WORD_COUNT_SUFFIX: &str = "_wordCountResults.txt";

/// An append-only results file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsFile {
    path: PathBuf,
}

impl ResultsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `name` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>, name: &str) -> Self {
        Self::new(dir.as_ref().join(name))
    }

    /// Word count results sit next to the input: `notes.txt` -> `notes_wordCountResults.txt`
    pub fn for_word_count(input: impl AsRef<Path>) -> Self {
        let mut name = input.as_ref().with_extension("").into_os_string();
        name.push(WORD_COUNT_SUFFIX);
        Self::new(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text`, creating the file and its parent directories as needed
    pub fn append(&self, text: &str) -> ReportResult<()> {
        let io_err = |source| ReportError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        file.write_all(text.as_bytes()).map_err(io_err)?;

        debug!(path = %self.path.display(), bytes = text.len(), "Appended report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_path() {
        assert_eq!(
            ResultsFile::for_word_count("dir/TC1.txt").path(),
            Path::new("dir/TC1_wordCountResults.txt")
        );
        assert_eq!(
            ResultsFile::for_word_count("plain").path(),
            Path::new("plain_wordCountResults.txt")
        );
    }

    #[test]
    fn test_in_dir() {
        assert_eq!(
            ResultsFile::in_dir("out", SALES_RESULTS).path(),
            Path::new("out/SalesResults.txt")
        );
    }
}
