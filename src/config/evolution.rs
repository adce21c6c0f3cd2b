use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::StrevoError;
use crate::types::Individual;
use serde::{Deserialize, Serialize};

/// Parameters of one run. Immutable while the run is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub target: String,
    pub population_size: usize,
    pub mutation_rate: f64,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: "testestr".to_string(),
            population_size: 100,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Validate and return the parsed target.
    pub fn parse_target(&self) -> Result<Individual, StrevoError> {
        Individual::parse(&self.target)
    }
}

impl ConfigSection for EvolutionConfig {
    fn validate(&self) -> Result<(), StrevoError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(StrevoError::InvalidPopulationSize(self.population_size));
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(StrevoError::InvalidMutationRate(self.mutation_rate));
        }
        self.parse_target()?;
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest {
                    name: "target".to_string(),
                    field_type: "string".to_string(),
                    default: serde_json::json!("testestr"),
                    min: Some(1.0),
                    max: None,
                    description: "String the population evolves toward (a-z only)".to_string(),
                },
                FieldManifest {
                    name: "population_size".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(100),
                    min: Some(2.0),
                    max: Some(10000.0),
                    description: "Number of individuals per generation (even)".to_string(),
                },
                FieldManifest {
                    name: "mutation_rate".to_string(),
                    field_type: "float".to_string(),
                    default: serde_json::json!(0.1),
                    min: Some(0.0),
                    max: Some(1.0),
                    description: "Per-character probability of random replacement".to_string(),
                },
            ],
        }
    }
}
