//! Summary statistics over integer samples.

use serde::Serialize;

/// Mean, population standard deviation and maximum of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub max: f64,
}

impl DataSummary {
    const ZERO: Self = Self {
        mean: 0.0,
        std_dev: 0.0,
        max: 0.0,
    };
}

/// Summarize a sample of integers.
///
/// An empty sample yields all-zero statistics. The standard deviation is
/// the population form (variance divided by N, not N-1).
pub fn summarize(data: &[i64]) -> DataSummary {
    if data.is_empty() {
        return DataSummary::ZERO;
    }

    let count = data.len() as f64;
    let total: i64 = data.iter().sum();
    let mean = total as f64 / count;

    let variance_sum: f64 = data
        .iter()
        .map(|&value| {
            let delta = value as f64 - mean;
            delta * delta
        })
        .sum();
    let std_dev = (variance_sum / count).sqrt();

    let max = data.iter().copied().fold(data[0], i64::max) as f64;

    DataSummary { mean, std_dev, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_is_all_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.max, 0.0);
    }

    #[test]
    fn test_known_sample() {
        let summary = summarize(&[1, 2, 3, 4, 5]);
        assert_eq!(summary.mean, 3.0);
        assert!((summary.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn test_single_element_has_zero_deviation() {
        let summary = summarize(&[42]);
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.max, 42.0);
    }

    #[test]
    fn test_negative_values() {
        let summary = summarize(&[-5, -1]);
        assert_eq!(summary.mean, -3.0);
        assert_eq!(summary.std_dev, 2.0);
        assert_eq!(summary.max, -1.0);
    }

    #[test]
    fn test_serializes_to_flat_object() {
        let json = serde_json::to_string(&summarize(&[1, 2, 3])).unwrap();
        assert!(json.contains("\"mean\":2.0"));
        assert!(json.contains("\"max\":3.0"));
    }
}
