mod test_signals;

use approx::assert_abs_diff_eq;
use sirius::config::ProcessorConfig;
use sirius::signal_processing::{SubsetAverager, average, max, min, moving_average};
use sirius::{DataProcessor, ProcessingError};

#[test]
fn test_filter_preserves_length() {
    for len in [1, 2, 3, 10, 57, 400] {
        let raw = test_signals::random_series(len, -100.0, 100.0, len as u64);
        for window in [1, 3, 5, 11, 101] {
            let smoothed = moving_average(&raw, window).unwrap();
            assert_eq!(
                smoothed.len(),
                raw.len(),
                "len {} window {}",
                len,
                window
            );
        }
    }
}

#[test]
fn test_filter_constant_input_is_unchanged() {
    for value in [-42.0, 0.0, 3.25, 999.0] {
        let raw = test_signals::constant_series(25, value);
        for window in [3, 7, 49] {
            for smoothed in moving_average(&raw, window).unwrap() {
                assert_abs_diff_eq!(smoothed, value, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_filter_interior_of_ramp_is_unchanged() {
    // A centered average reproduces a straight line away from the edges
    let raw = test_signals::ramp_series(20, -5.0, 0.5);
    let smoothed = moving_average(&raw, 5).unwrap();
    for i in 2..18 {
        assert_abs_diff_eq!(smoothed[i], raw[i], epsilon = 1e-9);
    }
    // Replicated edges pull the ends towards the interior
    assert!(smoothed[0] > raw[0]);
    assert!(smoothed[19] < raw[19]);
}

#[test]
fn test_filter_stays_within_input_bounds() {
    let raw = test_signals::random_series(300, -20.0, 80.0, 9);
    let smoothed = moving_average(&raw, 9).unwrap();
    let (lo, hi) = (min(&raw, "raw").unwrap(), max(&raw, "raw").unwrap());
    for value in smoothed {
        assert!(value >= lo - 1e-9 && value <= hi + 1e-9);
    }
}

#[test]
fn test_moving_average_example() {
    let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
    let expected = [1.333_333_333_333, 2.0, 3.0, 4.0, 4.666_666_666_667];
    for (got, want) in smoothed.iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
    }
}

#[test]
fn test_subset_count() {
    for group in 1..=12 {
        let averager = SubsetAverager::new(group).unwrap();
        for len in 0..=40 {
            let series = test_signals::ramp_series(len, 1.0, 1.0);
            assert_eq!(averager.aggregate(&series).len(), len.div_ceil(group));
        }
    }
}

#[test]
fn test_subset_padding_bias() {
    let averager = SubsetAverager::new(3).unwrap();
    let averages = averager.aggregate(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(averages.len(), 2);
    assert_abs_diff_eq!(averages[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(averages[1], 3.0, epsilon = 1e-12);
}

#[test]
fn test_subset_sum_is_preserved() {
    // Zero padding means every sample contributes exactly once
    let series = test_signals::random_series(103, -10.0, 10.0, 3);
    let averager = SubsetAverager::new(10).unwrap();
    let total: f64 = averager.aggregate(&series).iter().map(|a| a * 10.0).sum();
    assert_abs_diff_eq!(total, series.iter().sum::<f64>(), epsilon = 1e-9);
}

#[test]
fn test_statistics_edge_cases() {
    assert_eq!(average(&[]), 0.0);
    assert!(matches!(
        min(&[], "raw"),
        Err(ProcessingError::EmptyInput { .. })
    ));
    assert!(matches!(
        max(&[], "processed"),
        Err(ProcessingError::EmptyInput { .. })
    ));
    assert!(matches!(
        moving_average(&[], 3),
        Err(ProcessingError::EmptyInput { .. })
    ));
}

#[test]
fn test_processor_end_to_end() {
    let raw = test_signals::random_series(250, -100.0, 100.0, 2024);
    let mut dp = DataProcessor::new(&ProcessorConfig::new(7, 8)).unwrap();
    dp.set_raw_data(raw.clone());
    dp.run_filter().unwrap();
    dp.compute_averages();
    dp.compute_subset_averages();

    assert_eq!(dp.raw_data(), raw);
    assert_eq!(dp.processed_data().len(), 250);
    assert_eq!(dp.raw_subset_averages().len(), 32);
    assert_eq!(dp.processed_subset_averages().len(), 32);

    assert_abs_diff_eq!(dp.raw_average(), average(&raw), epsilon = 1e-12);
    assert!(dp.processed_min().unwrap() >= dp.raw_min().unwrap() - 1e-9);
    assert!(dp.processed_max().unwrap() <= dp.raw_max().unwrap() + 1e-9);
}

#[test]
fn test_processor_replacing_raw_requires_rerun() {
    let mut dp = DataProcessor::new(&ProcessorConfig::new(3, 2)).unwrap();
    dp.set_raw_data(test_signals::constant_series(4, 1.0));
    dp.run_filter().unwrap();
    dp.compute_subset_averages();

    dp.set_raw_data(test_signals::constant_series(10, 2.0));
    assert_eq!(dp.processed_data().len(), 4);
    assert_eq!(dp.raw_subset_averages().len(), 2);

    dp.run_filter().unwrap();
    dp.compute_subset_averages();
    assert_eq!(dp.processed_data().len(), 10);
    assert_eq!(dp.raw_subset_averages().len(), 5);
}
