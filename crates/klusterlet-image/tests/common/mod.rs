//! Common test infrastructure for klusterlet-image tests
//!
//! Builds throwaway image-manifests directories on disk.

#![allow(dead_code)]

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

/// Manifest with the subscription image used across resolution tests
pub const SUBSCRIPTION_MANIFEST: &str = r#"[
  {
    "image-key": "multicluster_operators_subscription",
    "image-name": "foo",
    "image-digest": "sha256:abc",
    "image-remote": "registry.example.com/ns"
  }
]"#;

/// A base directory containing `image-manifests/`
pub struct ManifestFixture {
    dir: TempDir,
}

impl ManifestFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("image-manifests")).expect("create image-manifests");
        Self { dir }
    }

    /// Write `image-manifests/<version>.json`
    pub fn release(self, version: &str, content: &str) -> Self {
        fs::write(self.manifest_dir().join(format!("{}.json", version)), content)
            .expect("write manifest");
        self
    }

    pub fn base(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().to_path_buf()).expect("utf-8 temp path")
    }

    pub fn manifest_dir(&self) -> Utf8PathBuf {
        self.base().join("image-manifests")
    }

    pub fn manifest_file(&self, version: &str) -> Utf8PathBuf {
        self.manifest_dir().join(format!("{}.json", version))
    }
}
