mod sensor;
mod waveform;

pub use sensor::{SignalSource, create_rng};
pub use waveform::SampleGenerator;
