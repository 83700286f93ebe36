//! Process startup: populate the manifest store and version catalog once

use crate::catalog::VersionCatalog;
use crate::keymap::ComponentImageKeyMap;
use crate::manifest::ManifestStore;
use crate::resolver::{DigestPolicy, ImageResolver};
use klusterlet_core::ManifestPaths;
use tracing::{debug, warn};

/// Image catalog state shared by every resolver and builder call
#[derive(Debug)]
pub struct ImageContext {
    store: ManifestStore,
    catalog: VersionCatalog,
    key_map: ComponentImageKeyMap,
    policy: DigestPolicy,
    release: Option<String>,
}

impl ImageContext {
    /// Assemble a context from already populated parts
    pub fn new(store: ManifestStore, catalog: VersionCatalog, key_map: ComponentImageKeyMap) -> Self {
        Self {
            store,
            catalog,
            key_map,
            policy: DigestPolicy::default(),
            release: None,
        }
    }

    /// Scan the version directory and load the manifest of `paths.release()`
    ///
    /// Failures are logged and leave the corresponding part empty, so later
    /// resolutions fail with `ImageNotFound` or `EmptyVersionCatalog`
    /// instead of the process refusing to start.
    pub fn initialize(
        paths: &ManifestPaths,
        constraint: &str,
        key_map: ComponentImageKeyMap,
    ) -> Self {
        let catalog = scan_catalog(paths, constraint);
        Self::load(paths, catalog, key_map)
    }

    /// Like [`ImageContext::initialize`], but load the highest available release
    ///
    /// `paths.release()` is used when no release is available.
    pub fn initialize_latest(
        paths: &ManifestPaths,
        constraint: &str,
        key_map: ComponentImageKeyMap,
    ) -> Self {
        let catalog = scan_catalog(paths, constraint);
        let latest = catalog
            .latest()
            .ok()
            .and_then(|v| catalog.release_name(v))
            .map(str::to_string);

        match latest {
            Some(release) => {
                debug!("Using latest available release {}", release);
                Self::load(&ManifestPaths::new(paths.base(), release), catalog, key_map)
            }
            None => Self::load(paths, catalog, key_map),
        }
    }

    fn load(paths: &ManifestPaths, catalog: VersionCatalog, key_map: ComponentImageKeyMap) -> Self {
        let store = ManifestStore::new();
        let manifest_file = paths.manifest_file();
        match store.load(&manifest_file) {
            Ok(()) => debug!("Loaded {} images from {}", store.len(), manifest_file),
            Err(e) => warn!("Error while reading the manifest: {}", e),
        }

        let mut ctx = Self::new(store, catalog, key_map);
        ctx.release = Some(paths.release().to_string());
        ctx
    }

    pub fn with_digest_policy(mut self, policy: DigestPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolver over this context's manifest and key map
    pub fn resolver(&self) -> ImageResolver<'_> {
        ImageResolver::new(&self.store, &self.key_map).with_digest_policy(self.policy)
    }

    pub fn store(&self) -> &ManifestStore {
        &self.store
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    pub fn key_map(&self) -> &ComponentImageKeyMap {
        &self.key_map
    }

    /// Release whose manifest was loaded, when initialized from disk
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }
}

fn scan_catalog(paths: &ManifestPaths, constraint: &str) -> VersionCatalog {
    let catalog = VersionCatalog::new();
    if let Err(e) = catalog.scan(&paths.manifest_dir(), constraint) {
        warn!("Error while getting version lists: {}", e);
    }
    catalog
}
