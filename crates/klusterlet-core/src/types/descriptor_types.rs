//! Component descriptor types handed to the reconciliation layer

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API group/version stamped on every addon resource
pub const AGENT_API_VERSION: &str = "agent.open-cluster-management.io/v1";

/// Pull policy for container images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum PullPolicy {
    /// Always pull the image
    Always,
    /// Only pull if not present locally
    #[default]
    IfNotPresent,
    /// Never pull, use local only
    Never,
}

/// Object identity shared by addon configs and component descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// Image settings applied to every image of one component resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalValues {
    #[serde(default)]
    pub image_pull_policy: PullPolicy,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_pull_secret: String,

    /// Image key to fully composed image reference
    #[serde(default)]
    pub image_overrides: BTreeMap<String, String>,
}

/// Spec block of a component descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorSpec {
    pub full_name_override: String,
    pub hub_kubeconfig_secret: String,
    pub cluster_name: String,
    pub cluster_namespace: String,
    pub global: GlobalValues,
}

/// Declarative resource describing one managed addon component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: DescriptorSpec,
}

impl ComponentDescriptor {
    /// Resource name (`klusterlet-addon-<short-name>`)
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Image reference attached under `image_key`, if any
    pub fn image(&self, image_key: &str) -> Option<&str> {
        self.spec
            .global
            .image_overrides
            .get(image_key)
            .map(String::as_str)
    }
}
