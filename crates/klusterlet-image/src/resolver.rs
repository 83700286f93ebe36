use crate::keymap::ComponentImageKeyMap;
use crate::manifest::ManifestStore;
use crate::types::ImageReference;
use klusterlet_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to do when a manifest entry carries no digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DigestPolicy {
    /// Refuse to compose a reference without a digest
    #[default]
    RequireDigest,
    /// Compose `<root>/<name>:<tag>` instead
    FallbackToTag,
}

/// Outcome of resolving one component image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// Image key as recorded in the manifest entry
    pub image_key: String,
    pub reference: ImageReference,
}

/// Resolves component names to image references against a manifest
pub struct ImageResolver<'a> {
    store: &'a ManifestStore,
    key_map: &'a ComponentImageKeyMap,
    policy: DigestPolicy,
}

impl<'a> ImageResolver<'a> {
    /// Create a resolver requiring digest-pinned references
    pub fn new(store: &'a ManifestStore, key_map: &'a ComponentImageKeyMap) -> Self {
        Self {
            store,
            key_map,
            policy: DigestPolicy::default(),
        }
    }

    pub fn with_digest_policy(mut self, policy: DigestPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve `component` to its image key and full reference
    ///
    /// # Arguments
    /// * `component` - Logical component name (e.g., "subscription")
    /// * `registry_override` - Registry root replacing the manifest's, ignored when empty
    ///
    /// # Errors
    /// `UnknownComponent` when the component has no image key, `ImageNotFound`
    /// when the key is missing from the manifest, `MissingDigest`/`MissingTag`
    /// when the entry cannot be pinned under the configured policy.
    pub fn resolve(&self, component: &str, registry_override: &str) -> Result<ResolvedImage> {
        let image_key = self
            .key_map
            .get(component)
            .ok_or_else(|| Error::unknown_component(component))?;

        let entry = self.store.lookup(image_key)?;

        let root = if registry_override.is_empty() {
            entry.image_repository.as_str()
        } else {
            registry_override
        };

        let reference = if !entry.image_digest.is_empty() {
            ImageReference::pinned(root, &entry.image_name, &entry.image_digest)
        } else {
            match self.policy {
                DigestPolicy::RequireDigest => {
                    return Err(Error::missing_digest(&entry.image_key));
                }
                DigestPolicy::FallbackToTag if entry.image_tag.is_empty() => {
                    return Err(Error::missing_tag(&entry.image_key));
                }
                DigestPolicy::FallbackToTag => {
                    ImageReference::tagged(root, &entry.image_name, &entry.image_tag)
                }
            }
        };

        debug!("Resolved component {} to {}", component, reference);

        Ok(ResolvedImage {
            image_key: entry.image_key.clone(),
            reference,
        })
    }
}
