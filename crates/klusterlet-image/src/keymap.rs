//! Component name to manifest image key mapping

use camino::Utf8Path;
use klusterlet_core::{Error, Result};
use std::collections::BTreeMap;
use std::fs;

/// Default mapping compiled into the binary
const EMBEDDED_COMPONENT_IMAGES: &str = include_str!("../component-images.yaml");

/// Maps logical component names (e.g. "subscription") to manifest image keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentImageKeyMap {
    keys: BTreeMap<String, String>,
}

impl ComponentImageKeyMap {
    /// Load the mapping shipped with the binary
    pub fn from_embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_COMPONENT_IMAGES)
    }

    /// Load a mapping from a YAML file of `component: image_key` pairs
    pub fn from_file(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path.as_str(), e))?;
        Self::from_yaml(&content)
    }

    /// Parse a mapping from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let keys: BTreeMap<String, String> = serde_yaml_ng::from_str(yaml)?;
        Ok(Self { keys })
    }

    /// Add or replace one mapping
    pub fn with_entry(mut self, component: impl Into<String>, image_key: impl Into<String>) -> Self {
        self.keys.insert(component.into(), image_key.into());
        self
    }

    /// Image key for `component`, if mapped
    pub fn get(&self, component: &str) -> Option<&str> {
        self.keys.get(component).map(String::as_str)
    }

    /// All `(component, image_key)` pairs, sorted by component name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys.iter().map(|(c, k)| (c.as_str(), k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
