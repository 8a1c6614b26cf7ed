use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use sirius::config::{AppConfig, TimingMode, ValueRange, Waveform};
use sirius::constants::DEFAULT_EXPORT_PATH;
use sirius::output::{OutputFormat, Report, create_formatter, save_series};
use sirius::processing::DataProcessor;
use sirius::prompt::Prompter;
use sirius::source::SignalSource;

#[derive(Parser, Debug)]
#[command(name = "sirius")]
#[command(about = "Smooth a generated sample series and report its statistics", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ask for every setting on the terminal
    #[arg(short, long)]
    interactive: bool,

    /// Number of samples to generate
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Pacing between samples: immediate, periodic, asynchronous
    #[arg(short, long, value_enum)]
    timing: Option<TimingMode>,

    /// Delay between samples for periodic pacing, in milliseconds
    #[arg(long)]
    period_ms: Option<u64>,

    /// Sample shape: linear, sine, random
    #[arg(long, value_enum)]
    waveform: Option<Waveform>,

    /// Value range for linear and random samples (e.g., "-100..100")
    #[arg(short, long, allow_hyphen_values = true)]
    range: Option<ValueRange>,

    /// Seed for random samples and delays
    #[arg(long)]
    seed: Option<u64>,

    /// Moving average window size (odd; even values are bumped)
    #[arg(short, long)]
    window: Option<usize>,

    /// Number of samples per subset average
    #[arg(short, long)]
    group: Option<usize>,

    /// Report format: text, json, csv
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Save raw and processed series to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(samples) = self.samples {
            config.source.sample_count = samples;
        }
        if let Some(timing) = self.timing {
            config.source.timing = timing;
        }
        if let Some(period_ms) = self.period_ms {
            config.source.period_ms = period_ms;
        }
        if let Some(waveform) = self.waveform {
            config.source.waveform = waveform;
        }
        if let Some(range) = self.range {
            config.source.range = range;
        }
        if self.seed.is_some() {
            config.source.seed = self.seed;
        }
        if let Some(window) = self.window {
            config.processor.window_size = window;
        }
        if let Some(group) = self.group {
            config.processor.group_size = group;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.output.is_some() {
            config.output.save_path = self.output.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    args.apply(&mut config);
    if args.group.is_none() {
        config.fit_default_group();
    }

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    if args.interactive {
        config = prompter.collect_config(config)?;
    }
    let config = config.validated().context("Invalid configuration")?;

    log::info!(
        "Generating {} {:?} samples ({:?} timing)",
        config.source.sample_count,
        config.source.waveform,
        config.source.timing
    );
    let mut source = SignalSource::from_config(&config.source);
    let samples = source.collect();

    let mut processor = DataProcessor::new(&config.processor)?;
    processor.set_raw_data(samples);
    processor.run_filter().context("Smoothing failed")?;
    processor.compute_averages();
    processor.compute_subset_averages();

    let report = Report::from_processor(&processor)?;
    let formatter = create_formatter(config.output.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    println!("{}", formatter.format(&report));

    let save_path = match config.output.save_path {
        Some(path) => Some(path),
        None if args.interactive => {
            println!();
            prompter
                .confirm_save(DEFAULT_EXPORT_PATH)?
                .then(|| PathBuf::from(DEFAULT_EXPORT_PATH))
        }
        None => None,
    };

    match save_path {
        Some(path) => {
            save_series(&path, processor.raw(), processor.processed())
                .with_context(|| format!("Failed to save {}", path.display()))?;
            println!("Data has been saved to '{}'.", path.display());
        }
        None if args.interactive => println!("Data was not saved."),
        None => {}
    }

    Ok(())
}
