//! CLI command implementations

pub mod images;
pub mod render;
pub mod resolve;
pub mod versions;

use crate::cli::ImageArgs;
use anyhow::{Context, Result};
use klusterlet_core::config::DEFAULT_RELEASE_VERSION;
use klusterlet_core::ManifestPaths;
use klusterlet_image::{ComponentImageKeyMap, DigestPolicy, ImageContext};

/// Release named by `--release`, then by the config's `spec.version`
pub(crate) fn requested_release<'a>(
    args: &'a ImageArgs,
    config_version: Option<&'a str>,
) -> Option<&'a str> {
    args.release.as_deref().or(config_version)
}

/// Scan available versions and load the manifest of the requested release
///
/// Without a requested release the highest available one is loaded, and
/// `DEFAULT_RELEASE_VERSION` when none is available.
pub(crate) fn image_context(args: &ImageArgs, config_version: Option<&str>) -> Result<ImageContext> {
    let requested = requested_release(args, config_version);
    let release = requested.unwrap_or(DEFAULT_RELEASE_VERSION);
    let paths = match &args.manifest_path {
        Some(base) => ManifestPaths::new(base.clone(), release),
        None => ManifestPaths::from_env(release),
    };

    let key_map = match &args.component_map {
        Some(path) => ComponentImageKeyMap::from_file(path)
            .with_context(|| format!("Failed to load component map {}", path))?,
        None => ComponentImageKeyMap::from_embedded()
            .context("Failed to load built-in component map")?,
    };

    let policy = if args.allow_tag_fallback {
        DigestPolicy::FallbackToTag
    } else {
        DigestPolicy::RequireDigest
    };

    let ctx = match requested {
        Some(_) => ImageContext::initialize(&paths, &args.constraint, key_map),
        None => ImageContext::initialize_latest(&paths, &args.constraint, key_map),
    };
    Ok(ctx.with_digest_policy(policy))
}

/// Release name for messages
pub(crate) fn loaded_release(ctx: &ImageContext) -> &str {
    ctx.release().unwrap_or(DEFAULT_RELEASE_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klusterlet_image::DEFAULT_VERSION_CONSTRAINT;

    fn args(release: Option<&str>) -> ImageArgs {
        ImageArgs {
            manifest_path: None,
            release: release.map(String::from),
            constraint: DEFAULT_VERSION_CONSTRAINT.to_string(),
            component_map: None,
            allow_tag_fallback: false,
        }
    }

    #[test]
    fn test_release_precedence() {
        let explicit = args(Some("2.2.0"));
        assert_eq!(requested_release(&explicit, Some("2.1.0")), Some("2.2.0"));

        let unset = args(None);
        assert_eq!(requested_release(&unset, Some("2.1.0")), Some("2.1.0"));
        assert_eq!(requested_release(&unset, None), None);
    }
}
