//! Defaults and validation bounds shared by the configuration layers
//!
//! The processor itself only requires an odd window and a non-zero group
//! size; the tighter bounds below apply to operator-supplied settings.

/// Default moving average window (samples).
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Default number of samples per subset average.
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Default number of samples produced by the signal source.
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Largest sample count accepted from the operator.
pub const MAX_SAMPLE_COUNT: usize = 10_000;

/// Smallest window accepted from the operator.
pub const MIN_WINDOW_SIZE: usize = 3;

/// Largest window accepted from the operator.
pub const MAX_WINDOW_SIZE: usize = 101;

/// Bounds for the periodic generation delay in milliseconds.
pub const MIN_PERIOD_MS: u64 = 100;
pub const MAX_PERIOD_MS: u64 = 1000;

/// Default delay for periodic generation in milliseconds.
pub const DEFAULT_PERIOD_MS: u64 = 100;

/// Randomized delay bounds for asynchronous generation in milliseconds.
pub const ASYNC_DELAY_MIN_MS: u64 = 100;
pub const ASYNC_DELAY_MAX_MS: u64 = 300;

/// Absolute bound on either end of the value range.
pub const VALUE_RANGE_LIMIT: f64 = 1000.0;

/// Phase increment per sample for the sine waveform, in radians.
pub const SINE_STEP_RADIANS: f64 = 0.1;

/// File written when the operator confirms saving interactively.
pub const DEFAULT_EXPORT_PATH: &str = "output.txt";
