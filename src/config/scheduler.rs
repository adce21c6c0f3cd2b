use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::StrevoError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Delay between generations while running.
    pub tick_interval_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { tick_interval_ms: 200 }
    }
}

impl SchedulerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl ConfigSection for SchedulerConfig {
    fn validate(&self) -> Result<(), StrevoError> {
        if self.tick_interval_ms == 0 {
            return Err(StrevoError::InvalidTickInterval);
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Scheduler".to_string(),
            fields: vec![FieldManifest {
                name: "tick_interval_ms".to_string(),
                field_type: "integer".to_string(),
                default: serde_json::json!(200),
                min: Some(1.0),
                max: Some(10000.0),
                description: "Milliseconds between generations".to_string(),
            }],
        }
    }
}
