//! Descriptive statistics over a complete series
//!
//! `average` falls back to `0.0` on an empty series, while `min` and `max`
//! have no meaningful value to report and return
//! [`ProcessingError::EmptyInput`] instead.

use rolling_stats::Stats;
use serde::Serialize;

use crate::error::{ProcessingError, Result};

/// Arithmetic mean of `series`, or `0.0` when it is empty
pub fn average(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let scale = 1.0 / series.len() as f64;
    series.iter().sum::<f64>() * scale
}

/// Smallest value in `series`
pub fn min(series: &[f64], name: &'static str) -> Result<f64> {
    series
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(ProcessingError::EmptyInput { series: name })
}

/// Largest value in `series`
pub fn max(series: &[f64], name: &'static str) -> Result<f64> {
    series
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(ProcessingError::EmptyInput { series: name })
}

/// Summary of one series for reporting
#[derive(Debug, Clone, Serialize)]
pub struct SeriesStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl SeriesStats {
    /// Summarize `series`; fails on an empty series like [`min`]/[`max`]
    pub fn of(series: &[f64], name: &'static str) -> Result<Self> {
        if series.is_empty() {
            return Err(ProcessingError::EmptyInput { series: name });
        }

        let mut stats: Stats<f64> = Stats::new();
        for &value in series {
            stats.update(value);
        }

        Ok(Self {
            count: stats.count,
            min: min(series, name)?,
            max: max(series, name)?,
            mean: average(series),
            std_dev: if stats.count > 1 { stats.std_dev } else { 0.0 },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_average() {
        assert_abs_diff_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(average(&[-5.0, 5.0]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_min_max() {
        let series = [3.0, -7.5, 12.0, 0.0];
        assert_eq!(min(&series, "raw").unwrap(), -7.5);
        assert_eq!(max(&series, "raw").unwrap(), 12.0);
    }

    #[test]
    fn test_min_max_single_value() {
        assert_eq!(min(&[4.0], "raw").unwrap(), 4.0);
        assert_eq!(max(&[4.0], "raw").unwrap(), 4.0);
    }

    #[test]
    fn test_min_max_empty_fails() {
        assert!(matches!(
            min(&[], "raw"),
            Err(ProcessingError::EmptyInput { series: "raw" })
        ));
        assert!(matches!(
            max(&[], "processed"),
            Err(ProcessingError::EmptyInput {
                series: "processed"
            })
        ));
    }

    #[test]
    fn test_series_stats() {
        let stats = SeriesStats::of(&[2.0, 4.0, 6.0], "raw").unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 6.0);
        assert_abs_diff_eq!(stats.mean, 4.0, epsilon = 1e-12);
        assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn test_series_stats_constant() {
        let stats = SeriesStats::of(&[1.5; 4], "raw").unwrap();
        assert_abs_diff_eq!(stats.std_dev, 0.0, epsilon = 1e-12);

        let single = SeriesStats::of(&[9.0], "raw").unwrap();
        assert_eq!(single.std_dev, 0.0);
    }

    #[test]
    fn test_series_stats_empty_fails() {
        assert!(SeriesStats::of(&[], "raw").is_err());
    }
}
