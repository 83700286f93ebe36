//! Addon configuration types (KlusterletAddonConfig resource)

use super::descriptor_types::{ObjectMeta, PullPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-managed-cluster addon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlusterletAddonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub metadata: ObjectMeta,

    pub spec: KlusterletAddonConfigSpec,
}

/// Spec block of the addon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlusterletAddonConfigSpec {
    /// Name of the managed cluster
    pub cluster_name: String,

    /// Namespace of the managed cluster on the hub
    pub cluster_namespace: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cluster_labels: BTreeMap<String, String>,

    /// Release whose image manifest should be used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Registry root replacing every manifest-declared repository
    #[serde(default)]
    pub image_registry: String,

    #[serde(default)]
    pub image_pull_secret: String,

    #[serde(default)]
    pub image_pull_policy: PullPolicy,

    #[serde(default)]
    pub application_manager: ComponentToggle,

    #[serde(default)]
    pub cert_policy_controller: ComponentToggle,

    #[serde(default)]
    pub iam_policy_controller: ComponentToggle,

    #[serde(default)]
    pub policy_controller: ComponentToggle,

    #[serde(default)]
    pub search_collector: ComponentToggle,

    #[serde(default = "ComponentToggle::on")]
    pub work_manager: ComponentToggle,
}

/// Enablement flag for one addon component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentToggle {
    #[serde(default)]
    pub enabled: bool,
}

impl Default for KlusterletAddonConfigSpec {
    fn default() -> Self {
        Self {
            cluster_name: String::new(),
            cluster_namespace: String::new(),
            cluster_labels: BTreeMap::new(),
            version: None,
            image_registry: String::new(),
            image_pull_secret: String::new(),
            image_pull_policy: PullPolicy::default(),
            application_manager: ComponentToggle::default(),
            cert_policy_controller: ComponentToggle::default(),
            iam_policy_controller: ComponentToggle::default(),
            policy_controller: ComponentToggle::default(),
            search_collector: ComponentToggle::default(),
            work_manager: ComponentToggle::on(),
        }
    }
}

impl ComponentToggle {
    pub fn on() -> Self {
        Self { enabled: true }
    }
}

impl KlusterletAddonConfig {
    /// Name of the config resource, used as the `app` label on descriptors
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
metadata:
  name: cluster1
  namespace: cluster1
spec:
  clusterName: cluster1
  clusterNamespace: cluster1
"#;
        let config: KlusterletAddonConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.name(), "cluster1");
        assert_eq!(config.spec.image_pull_policy, PullPolicy::IfNotPresent);
        assert!(config.spec.image_registry.is_empty());
        assert!(!config.spec.application_manager.enabled);
        assert!(!config.spec.search_collector.enabled);
        assert!(config.spec.work_manager.enabled);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
apiVersion: agent.open-cluster-management.io/v1
kind: KlusterletAddonConfig
metadata:
  name: prod-east
  namespace: prod-east
spec:
  clusterName: prod-east
  clusterNamespace: prod-east
  clusterLabels:
    cloud: Amazon
  version: 2.1.0
  imageRegistry: registry.example.com/acm
  imagePullSecret: pull-secret
  imagePullPolicy: Always
  applicationManager:
    enabled: true
  policyController:
    enabled: true
  workManager:
    enabled: false
"#;
        let config: KlusterletAddonConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.kind.as_deref(), Some("KlusterletAddonConfig"));
        assert_eq!(config.spec.version.as_deref(), Some("2.1.0"));
        assert_eq!(config.spec.image_registry, "registry.example.com/acm");
        assert_eq!(config.spec.image_pull_policy, PullPolicy::Always);
        assert!(config.spec.application_manager.enabled);
        assert!(config.spec.policy_controller.enabled);
        assert!(!config.spec.work_manager.enabled);
        assert_eq!(config.spec.cluster_labels["cloud"], "Amazon");
    }
}
