//! Supported release versions, discovered from the image-manifests directory

use camino::Utf8Path;
use klusterlet_core::{Error, Result};
use semver::{Version, VersionReq};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Minimum release served by default
pub const DEFAULT_VERSION_CONSTRAINT: &str = ">= 2.0.0";

#[derive(Debug)]
struct Releases {
    versions: Vec<Version>,
    /// Manifest file stem each version was read from (e.g. `v2.1` for 2.1.0)
    stems: HashMap<Version, String>,
}

/// Release versions that have a manifest and satisfy the minimum constraint
#[derive(Debug, Default)]
pub struct VersionCatalog {
    releases: OnceLock<Releases>,
}

impl VersionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog already holding `versions`
    pub fn from_versions(versions: Vec<Version>) -> Self {
        let releases = versions.into_iter().map(|v| (v.to_string(), v)).collect();
        let catalog = Self::new();
        catalog.retain(releases);
        catalog
    }

    /// Scan `dir` for `<semver>.json` files and keep those matching `constraint`
    ///
    /// One malformed file name fails the whole scan. Short names such as
    /// `2.1.json` read as `2.1.0`. The result is in file name order, not
    /// version order. The first non-empty scan is retained for
    /// [`VersionCatalog::available`].
    pub fn scan(&self, dir: &Utf8Path, constraint: &str) -> Result<Vec<Version>> {
        let req = VersionReq::parse(constraint).map_err(|source| Error::InvalidConstraint {
            constraint: constraint.to_string(),
            source,
        })?;

        let mut entries = fs::read_dir(dir)
            .map_err(|e| Error::io(dir.as_str(), e))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::io(dir.as_str(), e))?;
        entries.sort_by_key(|e| e.file_name());

        let mut releases = Vec::new();
        for entry in entries {
            let file_type = entry
                .file_type()
                .map_err(|e| Error::io(entry.path().to_string_lossy(), e))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if file_type.is_dir() || !file_name.contains(".json") {
                trace!("Skipping {} in {}", file_name, dir);
                continue;
            }

            let (stem, version) = parse_file_version(&file_name)?;
            if req.matches(&version) {
                releases.push((stem, version));
            } else {
                trace!("Version {} does not satisfy {}", version, constraint);
            }
        }

        debug!(
            "Found {} release versions in {} matching '{}'",
            releases.len(),
            dir,
            constraint
        );

        let versions = releases.iter().map(|(_, v)| v.clone()).collect();
        self.retain(releases);
        Ok(versions)
    }

    fn retain(&self, releases: Vec<(String, Version)>) {
        if releases.is_empty() {
            return;
        }
        let versions = releases.iter().map(|(_, v)| v.clone()).collect();
        let stems = releases.into_iter().map(|(stem, v)| (v, stem)).collect();
        let _ = self.releases.set(Releases { versions, stems });
    }

    /// Versions retained by the first successful scan
    pub fn available(&self) -> Result<&[Version]> {
        match self.releases.get() {
            Some(releases) if !releases.versions.is_empty() => Ok(&releases.versions),
            _ => Err(Error::EmptyVersionCatalog),
        }
    }

    /// Highest available version
    pub fn latest(&self) -> Result<&Version> {
        self.available()?
            .iter()
            .max()
            .ok_or(Error::EmptyVersionCatalog)
    }

    /// Release name of the manifest file `version` was read from
    pub fn release_name(&self, version: &Version) -> Option<&str> {
        self.releases
            .get()
            .and_then(|r| r.stems.get(version))
            .map(String::as_str)
    }
}

/// Strip the last extension and parse the remainder, allowing a leading `v`
///
/// Returns the stem alongside the version so the manifest can be found again.
fn parse_file_version(file_name: &str) -> Result<(String, Version)> {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let version_str = stem.strip_prefix('v').unwrap_or(&stem);

    let version =
        Version::parse(&pad_version(version_str)).map_err(|source| Error::VersionParse {
            file: file_name.to_string(),
            source,
        })?;
    Ok((stem, version))
}

/// Fill in missing minor and patch numbers, so `2` reads as `2.0.0`
fn pad_version(version: &str) -> String {
    let split = version.find(|c: char| c == '-' || c == '+').unwrap_or(version.len());
    let (core, suffix) = version.split_at(split);
    match core.split('.').count() {
        1 => format!("{}.0.0{}", core, suffix),
        2 => format!("{}.0{}", core, suffix),
        _ => version.to_string(),
    }
}
