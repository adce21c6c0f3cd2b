use crate::config::{AppConfig, ConfigManifest, ConfigSection};
use crate::engines::generation::GenerationReport;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a replaced individual stays highlighted in the grid.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

/// Form inputs and view-only state. Run state itself lives in the engine.
pub struct AppState {
    // Evolution Configuration
    pub target_input: String,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub seed: Option<u64>,
    pub manifest: ConfigManifest,

    // Execution State
    pub status_message: String,
    pub last_error: Option<String>,

    // Highlight expiry per population index
    highlights: HashMap<usize, Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let evolution = &config.evolution;
        Self {
            target_input: evolution.target.clone(),
            population_size: evolution.population_size,
            mutation_rate: evolution.mutation_rate,
            seed: evolution.seed,
            manifest: evolution.to_manifest(),
            status_message: "Ready".to_string(),
            last_error: None,
            highlights: HashMap::new(),
        }
    }

    /// Record a finished generation for display.
    pub fn apply_report(&mut self, report: &GenerationReport, now: Instant) {
        self.mark_changed(report.changed_indices.iter().copied(), now);
        self.status_message = format!(
            "Generation {} - Best fitness: {}",
            report.generation, report.best_fitness
        );
    }

    pub fn mark_changed(&mut self, indices: impl IntoIterator<Item = usize>, now: Instant) {
        let until = now + HIGHLIGHT_DURATION;
        for i in indices {
            self.highlights.insert(i, until);
        }
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    pub fn is_highlighted(&self, index: usize, now: Instant) -> bool {
        self.highlights.get(&index).is_some_and(|&until| now < until)
    }

    /// Drop expired highlights; returns the wait until the next one expires.
    pub fn prune_highlights(&mut self, now: Instant) -> Option<Duration> {
        self.highlights.retain(|_, until| now < *until);
        self.highlights
            .values()
            .map(|until| until.saturating_duration_since(now))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_expire() {
        let mut state = AppState::new();
        let t0 = Instant::now();
        state.mark_changed([1, 3], t0);
        assert!(state.is_highlighted(1, t0));
        assert!(!state.is_highlighted(2, t0));

        let later = t0 + HIGHLIGHT_DURATION;
        assert!(!state.is_highlighted(3, later));
        assert_eq!(state.prune_highlights(later), None);
    }
}
