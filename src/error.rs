use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrevoError {
    #[error("Invalid population size: {0} (must be a positive even number)")]
    InvalidPopulationSize(usize),

    #[error("Invalid target: {0:?} (must be non-empty and contain only a-z)")]
    InvalidTarget(String),

    #[error("Invalid mutation rate: {0} (must be between 0 and 1)")]
    InvalidMutationRate(f64),

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, StrevoError>;
