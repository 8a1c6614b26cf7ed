use sirius::config::{SourceConfig, TimingMode, ValueRange, Waveform};
use sirius::source::SignalSource;

/// `len` copies of `value`
pub fn constant_series(len: usize, value: f64) -> Vec<f64> {
    vec![value; len]
}

/// Evenly spaced ramp from `start` in steps of `step`
pub fn ramp_series(len: usize, start: f64, step: f64) -> Vec<f64> {
    (0..len).map(|i| start + i as f64 * step).collect()
}

/// Seeded uniform samples within `min..max`, generated without delays
pub fn random_series(len: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let config = SourceConfig {
        sample_count: len,
        timing: TimingMode::Immediate,
        waveform: Waveform::Random,
        range: ValueRange::new(min, max),
        seed: Some(seed),
        ..SourceConfig::default()
    };
    SignalSource::from_config(&config).collect()
}
