use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Empty input: {series} series has no samples")]
    EmptyInput { series: &'static str },

    #[error("Invalid window size {0}: must be odd and at least 1")]
    InvalidWindowSize(usize),

    #[error("Invalid group size {0}: must be at least 1")]
    InvalidGroupSize(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProcessingError>;
