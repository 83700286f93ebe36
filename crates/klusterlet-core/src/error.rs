//! Error types for klusterlet-core

use thiserror::Error;

/// Result type alias using klusterlet-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types shared by the image and component crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// File or directory could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file content could not be decoded into entries
    #[error("Malformed image manifest {path}: {source}")]
    ManifestParse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A file name in the manifest directory is not a semantic version
    #[error("Invalid semantic version found in image-manifests: {file}: {source}")]
    VersionParse {
        file: String,
        #[source]
        source: semver::Error,
    },

    /// Version constraint expression could not be parsed
    #[error("Invalid semantic constraint '{constraint}': {source}")]
    InvalidConstraint {
        constraint: String,
        #[source]
        source: semver::Error,
    },

    /// No image key mapping exists for the component
    #[error("Unable to locate default image name for component {component}")]
    UnknownComponent { component: String },

    /// Component is mapped but the manifest has no entry for its key
    #[error("ImageManifest not found for {image_key}")]
    ImageNotFound { image_key: String },

    /// Manifest entry has no digest and tag fallback is disabled
    #[error("ImageManifest for {image_key} has no image digest")]
    MissingDigest { image_key: String },

    /// Manifest entry has neither a digest nor a tag
    #[error("ImageManifest for {image_key} has neither an image digest nor an image tag")]
    MissingTag { image_key: String },

    /// No versions were scanned, or the constraint matched nothing
    #[error("Version list is empty")]
    EmptyVersionCatalog,
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an IO error bound to the path that failed
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown component error
    pub fn unknown_component(component: impl Into<String>) -> Self {
        Self::UnknownComponent {
            component: component.into(),
        }
    }

    /// Create an image not found error
    pub fn image_not_found(image_key: impl Into<String>) -> Self {
        Self::ImageNotFound {
            image_key: image_key.into(),
        }
    }

    /// Create a missing digest error
    pub fn missing_digest(image_key: impl Into<String>) -> Self {
        Self::MissingDigest {
            image_key: image_key.into(),
        }
    }

    /// Create a missing tag error
    pub fn missing_tag(image_key: impl Into<String>) -> Self {
        Self::MissingTag {
            image_key: image_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_component_message_names_component() {
        let err = Error::unknown_component("router");
        assert_eq!(
            err.to_string(),
            "Unable to locate default image name for component router"
        );
    }

    #[test]
    fn test_image_not_found_message_names_key() {
        let err = Error::image_not_found("search_collector");
        assert!(err.to_string().contains("search_collector"));
    }
}
