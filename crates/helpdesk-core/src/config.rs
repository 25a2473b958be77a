//! Help desk configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "HELPDESK_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Prefix of generated ticket ids
    pub ticket_id_prefix: String,
    /// Zero-padded digits after the ticket prefix
    pub ticket_id_width: usize,
    /// Prefix of generated message ids
    pub message_id_prefix: String,
    /// Minimum description length accepted by the ticket form
    pub min_description_len: usize,
    /// Optional maximum description length
    pub max_description_len: Option<usize>,
    /// Capacity of the event broadcast buffer
    pub event_buffer: usize,
    /// Load the sample tickets on startup
    pub seed_demo_data: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            ticket_id_prefix: "TKT".into(),
            ticket_id_width: 3,
            message_id_prefix: "MSG".into(),
            min_description_len: 10,
            max_description_len: None,
            event_buffer: 256,
            seed_demo_data: true,
        }
    }
}

impl DeskConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `$HELPDESK_CONFIG`, falling back to defaults
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Config not usable, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticket_id_width == 0 {
            return Err(ConfigError::Invalid("ticket_id_width must be at least 1".into()));
        }
        if self.event_buffer == 0 {
            return Err(ConfigError::Invalid("event_buffer must be at least 1".into()));
        }
        if let Some(max) = self.max_description_len {
            if max < self.min_description_len {
                return Err(ConfigError::Invalid(format!(
                    "max_description_len ({}) is below min_description_len ({})",
                    max, self.min_description_len
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DeskConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DeskConfig = serde_json::from_str(r#"{"ticket_id_prefix": "HD"}"#).unwrap();
        assert_eq!(config.ticket_id_prefix, "HD");
        assert_eq!(config.min_description_len, 10);
    }

    #[test]
    fn test_rejects_inverted_lengths() {
        let config = DeskConfig { min_description_len: 20, max_description_len: Some(5), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(DeskConfig::load("/nonexistent/helpdesk.json"), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("helpdesk-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"ticket_id_width": 5, "seed_demo_data": false}"#).unwrap();
        let config = DeskConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.ticket_id_width, 5);
        assert!(!config.seed_demo_data);
    }
}
