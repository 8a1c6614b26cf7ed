use crate::error::Result;

/// Common trait for whole-series filters
///
/// Implemented by [`MovingAverage`](super::MovingAverage). A filter consumes a
/// complete, already collected series and returns a new series of the same
/// length.
pub trait SeriesFilter {
    /// Filter `series`, returning the smoothed copy
    fn apply(&self, series: &[f64]) -> Result<Vec<f64>>;
}
