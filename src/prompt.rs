//! Interactive collection of the run configuration
//!
//! Every question is repeated until the answer is an integer inside the
//! allowed bounds. Running out of input aborts with an error instead of
//! looping forever.

use std::io::{BufRead, Write};

use crate::config::{AppConfig, TimingMode, ValueRange, Waveform};
use crate::constants::{
    MAX_PERIOD_MS, MAX_SAMPLE_COUNT, MAX_WINDOW_SIZE, MIN_PERIOD_MS, MIN_WINDOW_SIZE,
    VALUE_RANGE_LIMIT,
};
use crate::error::{ProcessingError, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until an integer within `min..=max` is entered
    pub fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ProcessingError::Config(
                    "input ended before a value was entered".to_string(),
                ));
            }

            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => writeln!(
                    self.output,
                    "Invalid input. Please enter a number between {} and {}.",
                    min, max
                )?,
            }
        }
    }

    fn read_choice(&mut self, title: &str, options: &[&str]) -> Result<usize> {
        writeln!(self.output, "{}", title)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{} - {}", i, option)?;
        }
        let last = options.len() as i64 - 1;
        let choice = self.read_int(&format!("Enter your choice (0-{}): ", last), 0, last)?;
        Ok(choice as usize)
    }

    fn read_range(&mut self) -> Result<ValueRange> {
        let limit = VALUE_RANGE_LIMIT as i64;
        loop {
            writeln!(
                self.output,
                "Enter the minimum and maximum possible values for data points (between {} and {}):",
                -limit, limit
            )?;
            let min = self.read_int("Minimum: ", -limit, limit)?;
            let max = self.read_int("Maximum: ", -limit, limit)?;

            let range = ValueRange::new(min as f64, max as f64);
            match range.validate() {
                Ok(()) => return Ok(range),
                Err(e) => writeln!(self.output, "{}. Please enter valid range values.", e)?,
            }
        }
    }

    /// Ask for every setting of a run, starting from `base`
    pub fn collect_config(&mut self, base: AppConfig) -> Result<AppConfig> {
        let mut config = base;

        config.source.sample_count = self.read_int(
            &format!("Enter the number of data points (1 to {}): ", MAX_SAMPLE_COUNT),
            1,
            MAX_SAMPLE_COUNT as i64,
        )? as usize;

        config.source.timing = match self.read_choice(
            "Select timing option:",
            &["Immediate", "Periodic", "Asynchronous"],
        )? {
            0 => TimingMode::Immediate,
            1 => TimingMode::Periodic,
            _ => TimingMode::Asynchronous,
        };
        if config.source.timing == TimingMode::Periodic {
            config.source.period_ms = self.read_int(
                &format!(
                    "Enter the data timing period in milliseconds ({} to {}): ",
                    MIN_PERIOD_MS, MAX_PERIOD_MS
                ),
                MIN_PERIOD_MS as i64,
                MAX_PERIOD_MS as i64,
            )? as u64;
        }

        config.source.waveform =
            match self.read_choice("Select data type:", &["Linear", "Sine", "Random"])? {
                0 => Waveform::Linear,
                1 => Waveform::Sine,
                _ => Waveform::Random,
            };
        if config.source.waveform.uses_range() {
            config.source.range = self.read_range()?;
        }

        let window = self.read_int(
            &format!(
                "Enter the moving average window size ({} to {}, odd numbers only): ",
                MIN_WINDOW_SIZE, MAX_WINDOW_SIZE
            ),
            MIN_WINDOW_SIZE as i64,
            MAX_WINDOW_SIZE as i64,
        )? as usize;
        if window % 2 == 0 {
            writeln!(
                self.output,
                "Window size must be odd. Incrementing to the next odd number."
            )?;
        }
        config.processor.window_size = window;
        config.processor.normalize_window();

        config.processor.group_size = self.read_int(
            &format!(
                "Enter the subset size (1 to {}): ",
                config.source.sample_count
            ),
            1,
            config.source.sample_count as i64,
        )? as usize;

        Ok(config)
    }

    /// Ask whether the series should be saved
    pub fn confirm_save(&mut self, path: &str) -> Result<bool> {
        let choice = self.read_choice(
            &format!(
                "Do you want to save the generated data to a text file ({})?",
                path
            ),
            &["Yes", "No"],
        )?;
        Ok(choice == 0)
    }
}
