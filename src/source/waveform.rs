use rand::RngExt;
use rand_chacha::ChaCha8Rng;

use crate::config::{ValueRange, Waveform};
use crate::constants::SINE_STEP_RADIANS;

/// Produces one sample at a time for a given waveform
///
/// The linear ramp spans the range exactly once per `count` samples and then
/// starts over; the sine phase keeps advancing across calls.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    waveform: Waveform,
    range: ValueRange,
    count: usize,
    step: usize,
}

impl SampleGenerator {
    pub fn new(waveform: Waveform, range: ValueRange, count: usize) -> Self {
        Self {
            waveform,
            range,
            count: count.max(1),
            step: 0,
        }
    }

    pub fn next_sample(&mut self, rng: &mut ChaCha8Rng) -> f64 {
        match self.waveform {
            Waveform::Linear => {
                // A single-sample ramp has no spacing; it sits at the minimum
                let increment = if self.count > 1 {
                    self.range.span() / (self.count - 1) as f64
                } else {
                    0.0
                };
                let value = self.range.min + self.step as f64 * increment;
                self.step = (self.step + 1) % self.count;
                value
            }
            Waveform::Sine => {
                let value = (self.step as f64 * SINE_STEP_RADIANS).sin();
                self.step += 1;
                value
            }
            Waveform::Random => self.range.min + rng.random::<f64>() * self.range.span(),
        }
    }
}
