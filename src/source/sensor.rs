use std::time::Duration;

use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::SampleGenerator;
use crate::config::{GenerationTiming, SourceConfig};

/// Seeded generator when `seed` is given, OS-seeded otherwise
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Simulated sensor producing a finite series of samples
///
/// Samples are generated one at a time, paced according to the configured
/// [`GenerationTiming`]. The random generator is owned by the source so that
/// a seeded source always yields the same series.
pub struct SignalSource {
    generator: SampleGenerator,
    timing: GenerationTiming,
    sample_count: usize,
    rng: ChaCha8Rng,
}

impl SignalSource {
    pub fn new(config: &SourceConfig, rng: ChaCha8Rng) -> Self {
        Self {
            generator: SampleGenerator::new(config.waveform, config.range, config.sample_count),
            timing: config.generation_timing(),
            sample_count: config.sample_count,
            rng,
        }
    }

    /// Build a source seeded from `config.seed`
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config, create_rng(config.seed))
    }

    /// Generate all samples, sleeping between them as configured
    pub fn collect(&mut self) -> Vec<f64> {
        self.collect_with(std::thread::sleep)
    }

    /// Generate all samples, handing each inter-sample delay to `sleep`
    ///
    /// Delays only separate samples. Unlike a sensor paced after every read,
    /// nothing is slept after the last sample, so `n` samples produce `n - 1`
    /// delays.
    pub fn collect_with<F>(&mut self, mut sleep: F) -> Vec<f64>
    where
        F: FnMut(Duration),
    {
        let mut samples = Vec::with_capacity(self.sample_count);

        for i in 0..self.sample_count {
            let value = self.generator.next_sample(&mut self.rng);
            samples.push(value);
            log::debug!("Sample {} generated: {}", i, value);

            if i + 1 == self.sample_count {
                break;
            }
            if let Some(delay) = self.next_delay() {
                sleep(delay);
            }
        }

        log::info!("Generated {} samples", samples.len());
        samples
    }

    fn next_delay(&mut self) -> Option<Duration> {
        match self.timing {
            GenerationTiming::Immediate => None,
            GenerationTiming::Periodic(period) => Some(period),
            GenerationTiming::Asynchronous { min, max } => {
                Some(min + (max - min).mul_f64(self.rng.random::<f64>()))
            }
        }
    }
}
