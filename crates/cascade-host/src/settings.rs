//! Extension settings
//!
//! One user-facing setting (the catalog path relative to the first
//! workspace root) plus the registration constants, with defaults matching
//! the stock configuration.

use serde::Deserialize;

/// Settings the embedder reads from the host's configuration store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtensionSettings {
    /// Catalog file path, relative to the first workspace root
    pub config_path: String,
    /// Document language the suggestion sources are registered for
    pub language_id: String,
    /// Character that fires the parent pass
    pub trigger_character: char,
    /// Identifier the selection command is registered under
    pub command_id: String,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            config_path: String::new(),
            language_id: "dart".to_string(),
            trigger_character: '@',
            command_id: "cascade.selectParent".to_string(),
        }
    }
}

impl ExtensionSettings {
    /// Settings with the given catalog path and stock registration values
    pub fn with_config_path(config_path: impl Into<String>) -> Self {
        Self {
            config_path: config_path.into(),
            ..Self::default()
        }
    }
}
