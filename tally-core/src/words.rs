//! Word frequency counting

use std::collections::HashMap;

/// Occurrence counts for whitespace-separated words
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    /// (word, count) in order of first appearance
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut counts = Self::new();
        counts.add_text(text);
        counts
    }

    /// Count every whitespace-separated word in `text`
    pub fn add_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.add(word);
        }
    }

    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total number of words counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&pos| self.entries[pos].1)
    }

    /// Words by descending count; equal counts keep first-appearance order
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(w, n)| (w.as_str(), *n))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let counts = WordCounts::from_text("b a b\nc a b\n");
        assert_eq!(counts.distinct(), 3);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.sorted(), vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let counts = WordCounts::from_text("zeta alpha zeta alpha mid");
        assert_eq!(counts.sorted(), vec![("zeta", 2), ("alpha", 2), ("mid", 1)]);
    }

    #[test]
    fn test_case_and_punctuation_are_significant() {
        let counts = WordCounts::from_text("Word word word,");
        assert_eq!(counts.distinct(), 3);
        assert_eq!(counts.get("word"), 1);
        assert_eq!(counts.get("missing"), 0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(WordCounts::from_text(" \n\t").distinct(), 0);
    }
}
