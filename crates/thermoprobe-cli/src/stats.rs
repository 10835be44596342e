//! Descriptive statistics over a recorded sample series.

use std::cmp::Ordering;

/// Aggregate statistics of one sampling session.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Computes the summary of a sample series.
///
/// Returns `None` when the series is empty.
pub fn summarize(samples: &[f64]) -> Option<Summary> {
    if samples.is_empty() {
        return None;
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let median = median(samples)?;

    Some(Summary {
        count: samples.len(),
        min,
        max,
        median,
    })
}

/// Median of a series, computed over a sorted copy.
///
/// An even-length series yields the mean of the two central values.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_length() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_median_even_length() {
        assert_eq!(median(&[7.0, 1.0, 9.0, 3.0]), Some(5.0));
    }

    #[test]
    fn test_median_is_order_independent() {
        let series = [44.5, 41.0, 47.25, 43.0, 45.5];
        let shuffles = [
            [41.0, 43.0, 44.5, 45.5, 47.25],
            [47.25, 45.5, 44.5, 43.0, 41.0],
            [45.5, 41.0, 47.25, 44.5, 43.0],
        ];
        let expected = median(&series);
        for shuffle in shuffles {
            assert_eq!(median(&shuffle), expected);
        }
    }

    #[test]
    fn test_median_single_sample() {
        assert_eq!(median(&[42.5]), Some(42.5));
    }

    #[test]
    fn test_empty_series_has_no_statistics() {
        assert_eq!(median(&[]), None);
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_summary_fields() {
        let samples = [47.25, 41.0, 68.5, 44.75];
        let summary = summarize(&samples).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.min, 41.0);
        assert_eq!(summary.max, 68.5);
        assert_eq!(summary.median, 46.0);
    }

    #[test]
    fn test_median_lies_between_extremes() {
        let samples = [50.2, 48.9, 51.3, 49.5, 50.0, 52.1, 47.8];
        let summary = summarize(&samples).unwrap();
        assert!(summary.min <= summary.median);
        assert!(summary.median <= summary.max);
    }
}
