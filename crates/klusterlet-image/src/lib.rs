//! Image manifest resolution for klusterlet addons
//!
//! This crate provides functionality for:
//! - Loading the per-release image manifest (image key to name/digest/registry)
//! - Discovering supported releases from the image-manifests directory
//! - Mapping component names to image keys
//! - Composing digest-pinned image references with registry overrides
//!
//! # Example
//!
//! ```no_run
//! use klusterlet_core::ManifestPaths;
//! use klusterlet_image::{ComponentImageKeyMap, ImageContext, DEFAULT_VERSION_CONSTRAINT};
//!
//! fn main() -> klusterlet_core::Result<()> {
//!     let paths = ManifestPaths::from_env("2.0.0");
//!     let ctx = ImageContext::initialize(
//!         &paths,
//!         DEFAULT_VERSION_CONSTRAINT,
//!         ComponentImageKeyMap::from_embedded()?,
//!     );
//!
//!     let resolved = ctx.resolver().resolve("subscription", "")?;
//!     println!("{} -> {}", resolved.image_key, resolved.reference);
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod context;
pub mod keymap;
pub mod manifest;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use catalog::{VersionCatalog, DEFAULT_VERSION_CONSTRAINT};
pub use context::ImageContext;
pub use keymap::ComponentImageKeyMap;
pub use manifest::{ManifestEntry, ManifestStore};
pub use resolver::{DigestPolicy, ImageResolver, ResolvedImage};
pub use types::ImageReference;
