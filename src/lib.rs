pub mod config;
pub mod engines;
pub mod error;
pub mod types;
pub mod ui;

pub use engines::generation::{GenerationEngine, GenerationReport};
pub use error::{Result, StrevoError};
pub use types::{FitnessScore, Individual, Population, RunState};
