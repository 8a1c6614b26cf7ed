pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod processing;
pub mod prompt;
pub mod signal_processing;

#[cfg(feature = "simulation")]
pub mod source;

pub use config::AppConfig;
pub use error::{ProcessingError, Result};
pub use processing::DataProcessor;
