use crate::config::{ConfigSection, EvolutionConfig};
use crate::ui::state::AppState;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Keep ASCII letters only, lowercased.
    pub fn sanitize_target(input: &str) -> String {
        input
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// Convert AppState to EvolutionConfig
    pub fn to_evolution_config(state: &AppState) -> EvolutionConfig {
        EvolutionConfig {
            target: state.target_input.clone(),
            population_size: state.population_size,
            mutation_rate: state.mutation_rate,
            seed: state.seed,
        }
    }

    /// Error message for the form, if the inputs cannot start a run.
    pub fn validate_inputs(state: &AppState) -> Result<(), String> {
        Self::to_evolution_config(state)
            .validate()
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_target_drops_non_letters() {
        assert_eq!(ConfigBridge::sanitize_target("Hello, World 42!"), "helloworld");
        assert_eq!(ConfigBridge::sanitize_target("ção"), "o");
    }

    #[test]
    fn test_validate_inputs_flags_odd_population() {
        let mut state = AppState::new();
        assert!(ConfigBridge::validate_inputs(&state).is_ok());
        state.population_size = 101;
        assert!(ConfigBridge::validate_inputs(&state).is_err());
    }

    #[test]
    fn test_to_evolution_config_copies_form() {
        let mut state = AppState::new();
        state.target_input = "abc".to_string();
        state.mutation_rate = 0.5;
        let config = ConfigBridge::to_evolution_config(&state);
        assert_eq!(config.target, "abc");
        assert_eq!(config.mutation_rate, 0.5);
        assert_eq!(config.population_size, 100);
    }
}
