//! Release image manifest: the catalog of image key to image coordinates

use camino::Utf8Path;
use klusterlet_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// One image entry of a release manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestEntry {
    /// Stable identifier used by resolvers
    pub image_key: String,

    #[serde(default)]
    pub image_name: String,

    #[serde(default)]
    pub image_version: String,

    #[serde(default)]
    pub image_tag: String,

    /// Content digest, authoritative for the composed reference
    #[serde(default)]
    pub image_digest: String,

    /// Default registry root for the image
    #[serde(default, rename = "image-remote", alias = "image-repository")]
    pub image_repository: String,

    #[serde(default)]
    pub git_sha256: String,

    #[serde(default)]
    pub git_repository: String,
}

/// Image manifest catalog, populated at most once
///
/// The first load that yields at least one entry wins. Later loads are
/// no-ops, including ones racing from other threads.
#[derive(Debug, Default)]
pub struct ManifestStore {
    images: OnceLock<Vec<ManifestEntry>>,
}

impl ManifestStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `entries`
    pub fn from_entries(entries: Vec<ManifestEntry>) -> Self {
        let store = Self::new();
        store.populate(entries);
        store
    }

    /// Load the manifest at `path` unless the store is already populated
    pub fn load(&self, path: &Utf8Path) -> Result<()> {
        if !self.is_empty() {
            debug!("Image manifest already loaded, skipping {}", path);
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|e| Error::io(path.as_str(), e))?;

        // Manifests are JSON; the YAML decoder accepts them as-is
        let entries: Vec<ManifestEntry> =
            serde_yaml_ng::from_str(&content).map_err(|source| Error::ManifestParse {
                path: path.to_string(),
                source,
            })?;

        debug!("Read {} image entries from {}", entries.len(), path);
        self.populate(entries);
        Ok(())
    }

    fn populate(&self, entries: Vec<ManifestEntry>) {
        if entries.is_empty() {
            return;
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.image_key.as_str()) {
                warn!(
                    "Duplicate image key '{}' in manifest, the first entry is used",
                    entry.image_key
                );
            }
        }

        if self.images.set(entries).is_err() {
            debug!("Image manifest populated concurrently, discarding this load");
        }
    }

    /// Find the entry for `image_key` (exact match, first wins)
    pub fn lookup(&self, image_key: &str) -> Result<&ManifestEntry> {
        self.entries()
            .iter()
            .find(|e| e.image_key == image_key)
            .ok_or_else(|| Error::image_not_found(image_key))
    }

    /// All entries in manifest order
    pub fn entries(&self) -> &[ManifestEntry] {
        self.images.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
