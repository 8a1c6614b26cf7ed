use super::filter::SeriesFilter;
use crate::error::{ProcessingError, Result};

/// Centered moving average filter with edge replication
///
/// Each output sample is the mean of the `window_size` input samples centered
/// on it. The series is extended at both ends by repeating its first and last
/// values, so the output has the same length as the input and constant
/// regions near the boundaries are passed through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverage {
    window_size: usize,
}

impl MovingAverage {
    /// Create a new moving average filter
    ///
    /// # Arguments
    /// * `window_size` - Number of samples to average; must be odd and non-zero
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 || window_size % 2 == 0 {
            return Err(ProcessingError::InvalidWindowSize(window_size));
        }
        Ok(Self { window_size })
    }
}

impl SeriesFilter for MovingAverage {
    fn apply(&self, series: &[f64]) -> Result<Vec<f64>> {
        moving_average(series, self.window_size)
    }
}

/// Smooth `raw` with a centered moving average of `window_size` samples
///
/// The padded working buffer holds `offset = (window_size - 1) / 2` copies of
/// the first sample, the series itself, then `offset` copies of the last
/// sample, for a total length of `raw.len() + window_size - 1`. An even
/// window looks `offset` samples back and `offset + 1` samples ahead; the one
/// slot left over at the end of the buffer is `0.0`, so the final output of
/// an even window is pulled towards zero.
///
/// # Errors
/// Returns [`ProcessingError::EmptyInput`] if `raw` is empty, and
/// [`ProcessingError::InvalidWindowSize`] for a zero window.
pub fn moving_average(raw: &[f64], window_size: usize) -> Result<Vec<f64>> {
    if window_size == 0 {
        return Err(ProcessingError::InvalidWindowSize(window_size));
    }
    let (&first, &last) = match (raw.first(), raw.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ProcessingError::EmptyInput { series: "raw" }),
    };

    let offset = (window_size - 1) / 2;
    let scale = 1.0 / window_size as f64;

    let mut padded = Vec::with_capacity(raw.len() + window_size - 1);
    padded.extend(std::iter::repeat_n(first, offset));
    padded.extend_from_slice(raw);
    padded.extend(std::iter::repeat_n(last, offset));
    if window_size % 2 == 0 {
        padded.push(0.0);
    }

    Ok(padded
        .windows(window_size)
        .map(|window| window.iter().sum::<f64>() * scale)
        .collect())
}
