//! Main GanitaConfig and loaders.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clustering::KmeansConfig;

use super::error::ConfigLoadError;
use super::plot::PlotSection;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full ganita configuration loaded from YAML
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GanitaConfig {
    /// Clustering settings
    #[serde(default)]
    pub kmeans: KmeansConfig,

    /// Rendering settings
    #[serde(default)]
    pub plot: PlotSection,
}

impl GanitaConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, falling back to defaults if absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: GanitaConfig = serde_yaml::from_str(yaml)?;
        config.kmeans.validate()?;
        config.plot.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
