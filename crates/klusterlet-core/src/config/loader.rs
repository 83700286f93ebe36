//! Addon configuration file loading

use crate::error::{Error, Result};
use crate::types::KlusterletAddonConfig;
use camino::Utf8Path;
use std::fs;
use tracing::debug;

impl KlusterletAddonConfig {
    /// Load an addon configuration from a YAML file
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::io(path.as_str(), e)
            }
        })?;

        let config = Self::from_yaml(&content)?;
        debug!("Loaded addon config '{}' from {}", config.name(), path);
        Ok(config)
    }

    /// Parse an addon configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: KlusterletAddonConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.name.is_empty() {
            return Err(Error::invalid_config("metadata.name must not be empty"));
        }
        if self.spec.cluster_name.is_empty() {
            return Err(Error::invalid_config("spec.clusterName must not be empty"));
        }
        Ok(())
    }
}
