// Configuration module

use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::directive::validation::check_value;
use crate::directive::{DirectiveConfig, DirectiveStore, RangedField, StoreOptions};
use crate::error::DirectiveError;

pub mod delivery;
pub mod logging;

pub use delivery::DeliveryConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Session configuration loaded from YAML
///
/// Every section is optional; an empty document yields the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub store: StoreOptions,

    /// Overrides of the session's starting snapshot
    #[serde(default, deserialize_with = "deserialize_initial")]
    pub initial: DirectiveConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SessionConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, DirectiveError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| DirectiveError::config(e.to_string()))?;

        let mut missing = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            }
        });

        if let Some(var_name) = missing {
            return Err(DirectiveError::config(format!(
                "Environment variable '{}' is referenced but not set",
                var_name
            )));
        }

        // serde_yaml rejects an empty document, treat it as all defaults
        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&substituted).map_err(|e| DirectiveError::config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectiveError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| DirectiveError::config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), DirectiveError> {
        let initial = &self.initial;

        for field in RangedField::ALL {
            check_value(field, initial.ranged_value(field))
                .map_err(|e| DirectiveError::config(format!("initial.{}", e)))?;
        }

        if initial.output_format.is_video() && !self.store.allow_video_output {
            return Err(DirectiveError::config(format!(
                "initial.outputFormat '{}' requires store.allow_video_output",
                initial.output_format
            )));
        }

        if let Some(delivery) = &self.delivery {
            delivery.validate().map_err(DirectiveError::Config)?;
        }

        Ok(())
    }

    /// Build the session store from this configuration
    pub fn build_store(&self) -> DirectiveStore {
        DirectiveStore::new(self.initial.clone(), self.store)
    }
}

/// Range check the 8-bit fields before they are narrowed, so an override
/// such as `compression: 300` reports the field's interval instead of a
/// numeric overflow.
fn deserialize_initial<'de, D>(deserializer: D) -> Result<DirectiveConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    for field in [RangedField::Compression, RangedField::Sharpness] {
        if let Some(n) = value.get(field.as_str()).and_then(serde_yaml::Value::as_i64) {
            check_value(field, n).map_err(D::Error::custom)?;
        }
    }
    serde_yaml::from_value(value).map_err(D::Error::custom)
}
