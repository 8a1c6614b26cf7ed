use super::{Formatter, Report};
use crate::signal_processing::SeriesStats;

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

fn stats_row(label: &str, stats: &SeriesStats) -> String {
    format!(
        "{:<10} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
        label, stats.count, stats.min, stats.max, stats.mean, stats.std_dev
    )
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.4}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Formatter for TextFormatter {
    fn format(&self, report: &Report) -> String {
        let mut lines = vec![
            format!(
                "{:<10} {:>8} {:>12} {:>12} {:>12} {:>12}",
                "Series", "Samples", "Minimum", "Maximum", "Average", "Std dev"
            ),
            stats_row("Raw", &report.raw),
            stats_row("Processed", &report.processed),
        ];

        if self.verbose {
            lines.push(String::new());
            lines.push(format!(
                "Window: {} samples, subset: {} samples",
                report.window_size, report.group_size
            ));
            lines.push(format!(
                "Raw subset averages: [{}]",
                join_values(&report.raw_subset_averages)
            ));
            lines.push(format!(
                "Processed subset averages: [{}]",
                join_values(&report.processed_subset_averages)
            ));
        }

        lines.join("\n")
    }
}
