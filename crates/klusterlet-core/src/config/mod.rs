//! Configuration loading and manifest path discovery

mod loader;
mod paths;

pub use paths::{ManifestPaths, DEFAULT_RELEASE_VERSION, MANIFEST_DIR_NAME, MANIFEST_PATH_ENV};
