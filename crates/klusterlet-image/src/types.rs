use serde::{Deserialize, Serialize};
use std::fmt;

/// Composed container image reference: `<root>/<name>@<digest>` or `<root>/<name>:<tag>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Registry root including any namespace path (e.g., "quay.io/open-cluster-management")
    pub root: String,
    /// Image name, the last path segment (e.g., "search-collector")
    pub name: String,
    /// Tag (e.g., "2.0.0") - only used when no digest is present
    pub tag: Option<String>,
    /// Digest (e.g., "sha256:abc123...") - authoritative when present
    pub digest: Option<String>,
}

impl ImageReference {
    /// Digest-pinned reference
    pub fn pinned(root: &str, name: &str, digest: &str) -> Self {
        Self {
            root: normalize_root(root),
            name: name.to_string(),
            tag: None,
            digest: Some(digest.to_string()),
        }
    }

    /// Tag-based reference
    pub fn tagged(root: &str, name: &str, tag: &str) -> Self {
        Self {
            root: normalize_root(root),
            name: name.to_string(),
            tag: Some(tag.to_string()),
            digest: None,
        }
    }
}

fn normalize_root(root: &str) -> String {
    root.trim_end_matches('/').to_string()
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.is_empty() {
            write!(f, "{}", self.name)?;
        } else {
            write!(f, "{}/{}", self.root, self.name)?;
        }
        if let Some(digest) = &self.digest {
            write!(f, "@{}", digest)
        } else if let Some(tag) = &self.tag {
            write!(f, ":{}", tag)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference_display() {
        let img = ImageReference::pinned("registry.example.com/ns", "foo", "sha256:abc");
        assert_eq!(img.to_string(), "registry.example.com/ns/foo@sha256:abc");

        let img = ImageReference::tagged("registry.example.com/ns/", "foo", "2.0.0");
        assert_eq!(img.to_string(), "registry.example.com/ns/foo:2.0.0");
    }

    #[test]
    fn test_empty_root_renders_bare_name() {
        let img = ImageReference::pinned("", "foo", "sha256:abc");
        assert_eq!(img.to_string(), "foo@sha256:abc");
    }
}
