mod csv;
pub mod export;
mod json;
mod text;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::processing::DataProcessor;
use crate::signal_processing::SeriesStats;

pub use self::csv::CsvFormatter;
pub use self::export::{save_series, write_series};
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Statistics of one processing run, ready for formatting
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub window_size: usize,
    pub group_size: usize,
    pub raw: SeriesStats,
    pub processed: SeriesStats,
    pub raw_subset_averages: Vec<f64>,
    pub processed_subset_averages: Vec<f64>,
}

impl Report {
    /// Gather the report from a processor that has run its full pipeline
    ///
    /// Window and group sizes are taken from the processor's own config.
    pub fn from_processor(processor: &DataProcessor) -> Result<Self> {
        let config = processor.config();
        let mut raw = SeriesStats::of(processor.raw(), "raw")?;
        let mut processed = SeriesStats::of(processor.processed(), "processed")?;
        // Report the stored averages rather than recomputing them
        raw.mean = processor.raw_average();
        processed.mean = processor.processed_average();

        Ok(Self {
            window_size: config.window_size,
            group_size: config.group_size,
            raw,
            processed,
            raw_subset_averages: processor.raw_subset_averages(),
            processed_subset_averages: processor.processed_subset_averages(),
        })
    }
}

pub trait Formatter {
    fn format(&self, report: &Report) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
pub(crate) fn sample_report() -> Report {
    Report {
        window_size: 3,
        group_size: 2,
        raw: SeriesStats {
            count: 4,
            min: -1.0,
            max: 5.5,
            mean: 2.25,
            std_dev: 2.75,
        },
        processed: SeriesStats {
            count: 4,
            min: 0.5,
            max: 4.0,
            mean: 2.125,
            std_dev: 1.5,
        },
        raw_subset_averages: vec![1.0, 3.5],
        processed_subset_averages: vec![1.25, 3.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProcessorConfig;

    #[test]
    fn test_report_from_processor() {
        let mut dp = DataProcessor::new(&ProcessorConfig::new(3, 2)).unwrap();
        dp.set_raw_data(vec![2.0, 2.0, 8.0]);
        dp.process().unwrap();

        let report = Report::from_processor(&dp).unwrap();
        assert_eq!(report.raw.count, 3);
        assert_eq!(report.raw.min, 2.0);
        assert_eq!(report.raw.max, 8.0);
        assert_eq!(report.raw.mean, dp.raw_average());
        assert_eq!(report.processed.count, 3);
        assert_eq!(report.raw_subset_averages, vec![2.0, 4.0]);
    }

    #[test]
    fn test_report_sizes_follow_processor() {
        let mut dp = DataProcessor::new(&ProcessorConfig::new(5, 4)).unwrap();
        dp.set_raw_data(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        dp.process().unwrap();

        let report = Report::from_processor(&dp).unwrap();
        assert_eq!(report.window_size, 5);
        assert_eq!(report.group_size, 4);
        assert_eq!(report.raw_subset_averages.len(), 2);
    }

    #[test]
    fn test_report_requires_processed_data() {
        let mut dp = DataProcessor::new(&ProcessorConfig::new(3, 2)).unwrap();
        dp.set_raw_data(vec![1.0]);
        assert!(Report::from_processor(&dp).is_err());
    }

    #[test]
    fn test_iso8601_timestamp_shape() {
        let ts = iso8601_timestamp();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
    }
}
