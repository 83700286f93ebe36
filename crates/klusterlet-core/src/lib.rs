//! # klusterlet-core
//!
//! Core library for klusterlet addons providing:
//! - Addon configuration parsing (KlusterletAddonConfig YAML)
//! - Image manifest location discovery (`IMAGE_MANIFEST_PATH`)
//! - Component descriptor types handed to the reconciliation layer
//! - The shared error type

pub mod config;
pub mod error;
pub mod types;

pub use config::ManifestPaths;
pub use error::{Error, Result};
pub use types::{ComponentDescriptor, GlobalValues, KlusterletAddonConfig, PullPolicy};
