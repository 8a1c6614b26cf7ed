//! Configuration for the sirius sample pipeline.
//!
//! Settings come from three layers, applied in order: `AppConfig::default()`,
//! an optional TOML file, then command-line overrides. The combined result is
//! checked once by [`AppConfig::validated`] before anything runs.
//!
//! ```toml
//! [source]
//! sample_count = 500
//! timing = "periodic"
//! period_ms = 200
//! waveform = "random"
//! range = { min = -50.0, max = 50.0 }
//!
//! [processor]
//! window_size = 5
//! group_size = 10
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ASYNC_DELAY_MAX_MS, ASYNC_DELAY_MIN_MS, DEFAULT_GROUP_SIZE, DEFAULT_PERIOD_MS,
    DEFAULT_SAMPLE_COUNT, DEFAULT_WINDOW_SIZE, MAX_PERIOD_MS, MAX_SAMPLE_COUNT, MAX_WINDOW_SIZE,
    MIN_PERIOD_MS, MIN_WINDOW_SIZE, VALUE_RANGE_LIMIT,
};
use crate::error::{ProcessingError, Result};
use crate::output::OutputFormat;

/// Closed interval of sample values
///
/// # Parsing formats
/// - `-100..100`
/// - `-100:100`
///
/// # Example
/// ```
/// use sirius::config::ValueRange;
///
/// let range: ValueRange = "-50..50".parse().unwrap();
/// assert_eq!(range.min, -50.0);
/// assert_eq!(range.max, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check the range against the operator limits
    pub fn validate(&self) -> Result<()> {
        let limit = VALUE_RANGE_LIMIT;
        if !(-limit..=limit).contains(&self.min) || !(-limit..=limit).contains(&self.max) {
            return Err(ProcessingError::Config(format!(
                "range {} must lie within {}..{}",
                self, -limit, limit
            )));
        }
        if self.min == 0.0 && self.max == 0.0 {
            return Err(ProcessingError::Config(
                "range minimum and maximum cannot both be zero".to_string(),
            ));
        }
        if self.min >= self.max {
            return Err(ProcessingError::Config(format!(
                "range minimum {} must be less than maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(-100.0, 100.0)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

impl FromStr for ValueRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();

        let (lo, hi) = s
            .split_once("..")
            .or_else(|| s.split_once(':'))
            .ok_or_else(|| format!("invalid range: {} (expected MIN..MAX)", s))?;

        let min: f64 = lo
            .trim()
            .parse()
            .map_err(|_| format!("invalid range minimum: {}", lo.trim()))?;
        let max: f64 = hi
            .trim()
            .parse()
            .map_err(|_| format!("invalid range maximum: {}", hi.trim()))?;

        Ok(Self::new(min, max))
    }
}

/// Shape of the generated samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Waveform {
    /// Evenly spaced ramp from range minimum to range maximum
    Linear,
    /// Unit sine wave advancing a fixed phase step per sample (range unused)
    Sine,
    /// Uniformly distributed values within the range
    Random,
}

impl Waveform {
    /// Whether the value range influences this waveform
    pub fn uses_range(&self) -> bool {
        matches!(self, Waveform::Linear | Waveform::Random)
    }
}

/// Pacing selector as given on the command line or in a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimingMode {
    /// Generate all samples back to back
    Immediate,
    /// Fixed delay between samples
    Periodic,
    /// Random delay between samples
    Asynchronous,
}

/// Resolved delay policy between generated samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationTiming {
    Immediate,
    Periodic(Duration),
    Asynchronous { min: Duration, max: Duration },
}

/// Signal source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Number of samples to generate
    pub sample_count: usize,
    /// Pacing between samples
    pub timing: TimingMode,
    /// Delay for periodic pacing in milliseconds
    pub period_ms: u64,
    /// Sample shape
    pub waveform: Waveform,
    /// Value range for linear and random waveforms
    pub range: ValueRange,
    /// Seed for the random generator; drawn from the OS when absent
    pub seed: Option<u64>,
}

impl SourceConfig {
    pub fn generation_timing(&self) -> GenerationTiming {
        match self.timing {
            TimingMode::Immediate => GenerationTiming::Immediate,
            TimingMode::Periodic => {
                GenerationTiming::Periodic(Duration::from_millis(self.period_ms))
            }
            TimingMode::Asynchronous => GenerationTiming::Asynchronous {
                min: Duration::from_millis(ASYNC_DELAY_MIN_MS),
                max: Duration::from_millis(ASYNC_DELAY_MAX_MS),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SAMPLE_COUNT).contains(&self.sample_count) {
            return Err(ProcessingError::Config(format!(
                "sample count {} must be between 1 and {}",
                self.sample_count, MAX_SAMPLE_COUNT
            )));
        }
        if self.timing == TimingMode::Periodic
            && !(MIN_PERIOD_MS..=MAX_PERIOD_MS).contains(&self.period_ms)
        {
            return Err(ProcessingError::Config(format!(
                "period {} ms must be between {} and {} ms",
                self.period_ms, MIN_PERIOD_MS, MAX_PERIOD_MS
            )));
        }
        if self.waveform.uses_range() {
            self.range.validate()?;
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            timing: TimingMode::Immediate,
            period_ms: DEFAULT_PERIOD_MS,
            waveform: Waveform::Linear,
            range: ValueRange::default(),
            seed: None,
        }
    }
}

/// Smoothing and subset averaging configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Moving average window in samples (odd)
    pub window_size: usize,
    /// Samples per subset average
    pub group_size: usize,
}

impl ProcessorConfig {
    pub fn new(window_size: usize, group_size: usize) -> Self {
        Self {
            window_size,
            group_size,
        }
    }

    /// Bump an even window to the next odd size
    pub fn normalize_window(&mut self) {
        if self.window_size % 2 == 0 {
            log::warn!(
                "Window size {} is even, using {}",
                self.window_size,
                self.window_size + 1
            );
            self.window_size += 1;
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, DEFAULT_GROUP_SIZE)
    }
}

/// Report and export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,
    /// Write raw and processed series here when set
    pub save_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            save_path: None,
        }
    }
}

/// Complete application configuration
///
/// # Example
/// ```
/// use sirius::config::AppConfig;
///
/// let mut config = AppConfig::default();
/// config.source.sample_count = 100;
/// config.processor.window_size = 6;
///
/// let config = config.validated().unwrap();
/// assert_eq!(config.processor.window_size, 7);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub processor: ProcessorConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Parse a TOML document; missing sections and keys keep their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ProcessingError::Config(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Shrink the default group size to fit a short series
    ///
    /// Only a group size still at [`DEFAULT_GROUP_SIZE`] is touched; any other
    /// value was chosen by the operator and is left for [`validated`] to
    /// reject.
    ///
    /// [`validated`]: AppConfig::validated
    pub fn fit_default_group(&mut self) {
        let samples = self.source.sample_count;
        if self.processor.group_size == DEFAULT_GROUP_SIZE
            && (1..DEFAULT_GROUP_SIZE).contains(&samples)
        {
            log::warn!(
                "Group size {} exceeds the {} samples, using {}",
                DEFAULT_GROUP_SIZE,
                samples,
                samples
            );
            self.processor.group_size = samples;
        }
    }

    /// Normalize and check all operator-facing bounds
    pub fn validated(mut self) -> Result<Self> {
        self.source.validate()?;

        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&self.processor.window_size) {
            return Err(ProcessingError::Config(format!(
                "window size {} must be between {} and {}",
                self.processor.window_size, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE
            )));
        }
        self.processor.normalize_window();

        if !(1..=self.source.sample_count).contains(&self.processor.group_size) {
            return Err(ProcessingError::Config(format!(
                "group size {} must be between 1 and the sample count {}",
                self.processor.group_size, self.source.sample_count
            )));
        }

        Ok(self)
    }
}
