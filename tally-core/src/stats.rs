//! Descriptive statistics over a sample of floats

use crate::error::{CoreError, CoreResult};

/// Summary statistics for a non-empty sample
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// `None` when every value is distinct
    pub mode: Option<f64>,
    /// Sample standard deviation (n - 1); `None` for a single value
    pub std_dev: Option<f64>,
    /// Population variance (n)
    pub variance: f64,
}

impl Summary {
    pub fn compute(data: &[f64]) -> CoreResult<Self> {
        if data.is_empty() {
            return Err(CoreError::EmptyInput("statistics sample".to_string()));
        }

        let mean = mean(data);
        Ok(Self {
            count: data.len(),
            mean,
            median: median(data),
            mode: mode(data),
            std_dev: sample_std_dev(data, mean),
            variance: population_variance(data, mean),
        })
    }
}

pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Most frequent value; ties go to the value seen first
pub fn mode(data: &[f64]) -> Option<f64> {
    // (value, count) in first-seen order
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &x in data {
        match counts.iter_mut().find(|(v, _)| *v == x) {
            Some((_, n)) => *n += 1,
            None => counts.push((x, 1)),
        }
    }

    let (value, best) = counts
        .iter()
        .fold((f64::NAN, 0), |acc, &(v, n)| if n > acc.1 { (v, n) } else { acc });
    (best > 1).then_some(value)
}

pub fn sample_std_dev(data: &[f64], mean: f64) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let ss: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Some((ss / (data.len() - 1) as f64).sqrt())
}

pub fn population_variance(data: &[f64], mean: f64) -> f64 {
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_summary() {
        let s = Summary::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(s.count, 8);
        assert!((s.mean - 5.0).abs() < EPS);
        assert!((s.median - 4.5).abs() < EPS);
        assert_eq!(s.mode, Some(4.0));
        assert!((s.variance - 4.0).abs() < EPS);
        assert!((s.std_dev.unwrap() - (32.0f64 / 7.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn test_odd_median_unsorted() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), 5.0);
    }

    #[test]
    fn test_mode_absent_when_all_distinct() {
        assert_eq!(mode(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_mode_tie_prefers_first_seen() {
        assert_eq!(mode(&[3.0, 1.0, 1.0, 3.0]), Some(3.0));
    }

    #[test]
    fn test_single_value() {
        let s = Summary::compute(&[42.0]).unwrap();
        assert_eq!(s.std_dev, None);
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.mode, None);
    }

    #[test]
    fn test_empty_sample() {
        assert!(matches!(Summary::compute(&[]), Err(CoreError::EmptyInput(_))));
    }
}
