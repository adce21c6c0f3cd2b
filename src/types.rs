use crate::error::{Result, StrevoError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbols an individual may contain.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of positions where an individual matches the target.
pub type FitnessScore = usize;

/// Ordered, fixed-size collection of individuals evaluated together.
pub type Population = Vec<Individual>;

/// Draw one symbol uniformly from [`ALPHABET`].
pub fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    ALPHABET[rng.gen_range(0..ALPHABET.len())]
}

pub fn is_symbol(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// Candidate string of fixed length over [`ALPHABET`].
///
/// Stored as raw bytes so crossover can splice slices directly. Once built an
/// individual is never modified; operators always produce new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual(Vec<u8>);

impl Individual {
    /// Parse a string, rejecting anything outside the alphabet or empty input.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(is_symbol) {
            return Err(StrevoError::InvalidTarget(s.to_string()));
        }
        Ok(Self(s.as_bytes().to_vec()))
    }

    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        debug_assert!(symbols.iter().copied().all(is_symbol));
        Self(symbols)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Running,
    /// Best individual equals the target. Terminal until the next start.
    Converged,
    /// Stopped by the user. Terminal until the next start.
    Stopped,
}

impl RunState {
    pub fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunState::Idle => "Idle",
            RunState::Running => "Running",
            RunState::Converged => "Converged",
            RunState::Stopped => "Stopped",
        };
        f.write_str(label)
    }
}
