use crate::error::{ProcessingError, Result};

/// Fixed-size subset averager
///
/// Splits a series into consecutive, non-overlapping groups of `group_size`
/// samples and reports the mean of each group. A trailing partial group is
/// completed with zeros and still divided by the full group size, so its
/// average is pulled towards zero.
#[derive(Debug, Clone, Copy)]
pub struct SubsetAverager {
    group_size: usize,
}

impl SubsetAverager {
    pub fn new(group_size: usize) -> Result<Self> {
        if group_size == 0 {
            return Err(ProcessingError::InvalidGroupSize(group_size));
        }
        Ok(Self { group_size })
    }

    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Number of zeros appended to complete the final group of `len` samples
    pub fn padding(&self, len: usize) -> usize {
        match len % self.group_size {
            0 => 0,
            rem => self.group_size - rem,
        }
    }

    /// Average each group of `series`
    ///
    /// Returns `ceil(series.len() / group_size)` values; an empty series
    /// yields an empty result.
    pub fn aggregate(&self, series: &[f64]) -> Vec<f64> {
        let scale = 1.0 / self.group_size as f64;

        // Missing padding zeros contribute nothing to the sum, only the
        // fixed divisor applies.
        series
            .chunks(self.group_size)
            .map(|group| group.iter().sum::<f64>() * scale)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_partial_group_is_zero_padded() {
        let averager = SubsetAverager::new(3).unwrap();
        let averages = averager.aggregate(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(averages.len(), 2);
        assert_abs_diff_eq!(averages[0], 2.0, epsilon = 1e-12);
        // (4 + 5 + 0) / 3, not (4 + 5) / 2
        assert_abs_diff_eq!(averages[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_multiple_has_no_padding() {
        let averager = SubsetAverager::new(2).unwrap();
        assert_eq!(averager.padding(6), 0);
        let averages = averager.aggregate(&[1.0, 3.0, 5.0, 7.0, -2.0, 2.0]);
        assert_eq!(averages, vec![2.0, 6.0, 0.0]);
    }

    #[test]
    fn test_padding() {
        let averager = SubsetAverager::new(4).unwrap();
        assert_eq!(averager.padding(0), 0);
        assert_eq!(averager.padding(1), 3);
        assert_eq!(averager.padding(5), 3);
        assert_eq!(averager.padding(7), 1);
        assert_eq!(averager.padding(8), 0);
    }

    #[test]
    fn test_subset_count() {
        for group_size in 1..=7 {
            let averager = SubsetAverager::new(group_size).unwrap();
            for len in 0usize..30 {
                let series: Vec<f64> = (0..len).map(|i| i as f64).collect();
                assert_eq!(
                    averager.aggregate(&series).len(),
                    len.div_ceil(group_size),
                    "len {} group {}",
                    len,
                    group_size
                );
            }
        }
    }

    #[test]
    fn test_group_of_one_is_identity() {
        let averager = SubsetAverager::new(1).unwrap();
        let series = [1.5, -2.5, 4.0];
        assert_eq!(averager.aggregate(&series), series.to_vec());
    }

    #[test]
    fn test_group_larger_than_series() {
        let averager = SubsetAverager::new(10).unwrap();
        let averages = averager.aggregate(&[5.0, 5.0]);
        assert_eq!(averages.len(), 1);
        assert_abs_diff_eq!(averages[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series_yields_empty() {
        let averager = SubsetAverager::new(3).unwrap();
        assert!(averager.aggregate(&[]).is_empty());
    }

    #[test]
    fn test_zero_group_size_rejected() {
        assert!(matches!(
            SubsetAverager::new(0),
            Err(ProcessingError::InvalidGroupSize(0))
        ));
    }
}
