use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::composite::{Container, RemovePolicy};
use crate::error::ConfigError;
use crate::pipeline::{DataSource, LayerSpec, Pipeline, DEFAULT_FILE_NAME};

// =============================================================================
// Config sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub file_name: String,
    /// Innermost first.
    pub layers: Vec<LayerSpec>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            layers: vec![LayerSpec::Encryption, LayerSpec::compression()],
        }
    }
}

impl PipelineConfig {
    pub fn source(&self) -> Box<dyn DataSource> {
        Pipeline::from_config(self).build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    pub remove_policy: RemovePolicy,
}

impl CompositeConfig {
    pub fn container(&self) -> Container {
        Container::with_policy(self.remove_policy)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub composite: CompositeConfig,
}

// =============================================================================
// Loading
// =============================================================================

impl AppConfig {
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(ConfigError::from)
    }

    /// Picks the format from the extension, or sniffs the content when the
    /// extension is missing or unknown.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::io(path.display().to_string(), err.to_string()))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::parse_json(&content),
            Some("toml") => Self::parse_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::parse_json(&content)
                } else {
                    Self::parse_toml(&content)
                }
            }
        }
    }
}
