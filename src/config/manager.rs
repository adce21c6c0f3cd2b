use super::{evolution::EvolutionConfig, scheduler::SchedulerConfig, traits::ConfigSection};
use crate::error::StrevoError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `STREVO_EVOLUTION__TARGET=hello`.
pub const ENV_PREFIX: &str = "STREVO";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), StrevoError> {
        self.evolution.validate()?;
        self.scheduler.validate()?;
        Ok(())
    }

    /// Defaults, then the optional file, then `STREVO_*` environment variables.
    fn layered(path: Option<&Path>, required: bool) -> Result<Self, StrevoError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(required));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Build a manager from layered sources. A missing file is not an error here.
    pub fn load(path: Option<&Path>) -> Result<Self, StrevoError> {
        let config = AppConfig::layered(path, false)?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StrevoError> {
        let config = AppConfig::layered(Some(path.as_ref()), true)?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StrevoError> {
        let toml_str = toml::to_string_pretty(&self.get())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f`; the change is kept only if the result validates.
    pub fn update<F>(&self, f: F) -> Result<(), StrevoError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_rolls_back_invalid_change() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.evolution.population_size = 3);
        assert!(matches!(result, Err(StrevoError::InvalidPopulationSize(3))));
        assert_eq!(manager.get().evolution.population_size, 100);
    }

    #[test]
    fn test_update_applies_valid_change() {
        let manager = ConfigManager::new();
        manager.update(|c| c.evolution.target = "hello".to_string()).unwrap();
        assert_eq!(manager.get().evolution.target, "hello");
    }
}
