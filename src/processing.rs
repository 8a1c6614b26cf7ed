use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::signal_processing::{MovingAverage, SeriesFilter, SubsetAverager, stats};

/// Owns a raw series and everything derived from it
///
/// Derived data is only refreshed by the explicit `run_filter`,
/// `compute_averages` and `compute_subset_averages` calls. Replacing the raw
/// series leaves the derived values as they were until those calls are made
/// again.
pub struct DataProcessor {
    config: ProcessorConfig,
    filter: Box<dyn SeriesFilter>,
    averager: SubsetAverager,
    raw: Vec<f64>,
    processed: Vec<f64>,
    raw_subset_averages: Vec<f64>,
    processed_subset_averages: Vec<f64>,
    raw_average: f64,
    processed_average: f64,
}

impl DataProcessor {
    pub fn new(config: &ProcessorConfig) -> Result<Self> {
        let filter = MovingAverage::new(config.window_size)?;
        let averager = SubsetAverager::new(config.group_size)?;
        Ok(Self::with_filter(*config, Box::new(filter), averager))
    }

    fn with_filter(
        config: ProcessorConfig,
        filter: Box<dyn SeriesFilter>,
        averager: SubsetAverager,
    ) -> Self {
        Self {
            config,
            filter,
            averager,
            raw: Vec::new(),
            processed: Vec::new(),
            raw_subset_averages: Vec::new(),
            processed_subset_averages: Vec::new(),
            raw_average: 0.0,
            processed_average: 0.0,
        }
    }

    /// Window and group sizes fixed at construction
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Replace the raw series
    pub fn set_raw_data(&mut self, raw: Vec<f64>) {
        log::debug!("Raw series replaced ({} samples)", raw.len());
        self.raw = raw;
    }

    /// Smooth the raw series into the processed series
    ///
    /// Each run replaces the processed series. On error the previous
    /// processed series is kept.
    pub fn run_filter(&mut self) -> Result<()> {
        self.processed = self.filter.apply(&self.raw)?;
        log::info!("Filtered {} samples", self.processed.len());
        Ok(())
    }

    /// Refresh the stored raw and processed averages
    pub fn compute_averages(&mut self) {
        self.raw_average = stats::average(&self.raw);
        self.processed_average = stats::average(&self.processed);
        log::debug!(
            "Averages: raw {}, processed {}",
            self.raw_average,
            self.processed_average
        );
    }

    /// Refresh the raw and processed subset averages
    pub fn compute_subset_averages(&mut self) {
        self.raw_subset_averages = self.averager.aggregate(&self.raw);
        self.processed_subset_averages = self.averager.aggregate(&self.processed);
        log::debug!(
            "Subset averages: {} raw, {} processed ({} per group, {} padding samples)",
            self.raw_subset_averages.len(),
            self.processed_subset_averages.len(),
            self.averager.group_size(),
            self.averager.padding(self.raw.len())
        );
    }

    pub fn raw(&self) -> &[f64] {
        &self.raw
    }

    pub fn processed(&self) -> &[f64] {
        &self.processed
    }

    pub fn raw_data(&self) -> Vec<f64> {
        self.raw.clone()
    }

    pub fn processed_data(&self) -> Vec<f64> {
        self.processed.clone()
    }

    pub fn raw_subset_averages(&self) -> Vec<f64> {
        self.raw_subset_averages.clone()
    }

    pub fn processed_subset_averages(&self) -> Vec<f64> {
        self.processed_subset_averages.clone()
    }

    pub fn raw_min(&self) -> Result<f64> {
        stats::min(&self.raw, "raw")
    }

    pub fn raw_max(&self) -> Result<f64> {
        stats::max(&self.raw, "raw")
    }

    /// Raw average as of the last `compute_averages`
    pub fn raw_average(&self) -> f64 {
        self.raw_average
    }

    pub fn processed_min(&self) -> Result<f64> {
        stats::min(&self.processed, "processed")
    }

    pub fn processed_max(&self) -> Result<f64> {
        stats::max(&self.processed, "processed")
    }

    /// Processed average as of the last `compute_averages`
    pub fn processed_average(&self) -> f64 {
        self.processed_average
    }

    /// Run filter, averages and subset averages in order
    pub fn process(&mut self) -> Result<()> {
        self.run_filter()?;
        self.compute_averages();
        self.compute_subset_averages();
        Ok(())
    }
}
