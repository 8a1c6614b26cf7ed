use super::{Formatter, Report};
use crate::signal_processing::SeriesStats;

pub struct CsvFormatter;

fn row(series: &str, stats: &SeriesStats, subsets: &[f64]) -> String {
    let subsets = subsets
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";");
    format!(
        "{},{},{},{},{},{},{}",
        series, stats.count, stats.min, stats.max, stats.mean, stats.std_dev, subsets
    )
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &Report) -> String {
        format!(
            "{}\n{}",
            row("raw", &report.raw, &report.raw_subset_averages),
            row(
                "processed",
                &report.processed,
                &report.processed_subset_averages
            )
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("series,count,min,max,mean,std_dev,subset_averages")
    }
}
