//! Image manifest location discovery

use camino::{Utf8Path, Utf8PathBuf};
use std::env;

/// Environment variable relocating the image-manifests directory
pub const MANIFEST_PATH_ENV: &str = "IMAGE_MANIFEST_PATH";

/// Directory holding one `<semver>.json` manifest per supported release
pub const MANIFEST_DIR_NAME: &str = "image-manifests";

/// Release used when neither the config nor the caller names one
pub const DEFAULT_RELEASE_VERSION: &str = "2.0.0";

/// Where the manifest for one release and the version directory live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    base: Utf8PathBuf,
    release: String,
}

impl ManifestPaths {
    /// Paths rooted at an explicit base directory
    pub fn new(base: impl Into<Utf8PathBuf>, release: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            release: release.into(),
        }
    }

    /// Paths rooted at `$IMAGE_MANIFEST_PATH`, or the working directory when unset
    pub fn from_env(release: impl Into<String>) -> Self {
        let base = env::var(MANIFEST_PATH_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(Utf8PathBuf::from)
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        Self::new(base, release)
    }

    pub fn base(&self) -> &Utf8Path {
        &self.base
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    /// Directory scanned for available releases
    pub fn manifest_dir(&self) -> Utf8PathBuf {
        self.base.join(MANIFEST_DIR_NAME)
    }

    /// Manifest file for the configured release
    pub fn manifest_file(&self) -> Utf8PathBuf {
        self.manifest_dir().join(format!("{}.json", self.release))
    }
}
