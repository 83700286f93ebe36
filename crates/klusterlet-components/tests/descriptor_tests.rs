//! Integration tests for rendering component descriptors from an addon config
//!
//! Checks the serialized shape the cluster-side agent depends on.

use klusterlet_components::{ComponentResourceBuilder, COMPONENT_TYPES};
use klusterlet_core::{Error, KlusterletAddonConfig};
use klusterlet_image::{
    ComponentImageKeyMap, ImageContext, ManifestEntry, ManifestStore, VersionCatalog,
};

const ADDON_NAMESPACE: &str = "open-cluster-management-agent-addon";

const CONFIG_ALL_ENABLED: &str = r#"
apiVersion: agent.open-cluster-management.io/v1
kind: KlusterletAddonConfig
metadata:
  name: managed-1
  namespace: managed-1
spec:
  clusterName: managed-1
  clusterNamespace: managed-1
  imagePullSecret: multiclusterhub-operator-pull-secret
  applicationManager:
    enabled: true
  certPolicyController:
    enabled: true
  iamPolicyController:
    enabled: true
  policyController:
    enabled: true
  searchCollector:
    enabled: true
"#;

fn full_context() -> ImageContext {
    let keys = [
        "multicluster_operators_subscription",
        "cert_policy_controller",
        "iam_policy_controller",
        "config_policy_controller",
        "governance_policy_spec_sync",
        "governance_policy_status_sync",
        "governance_policy_template_sync",
        "search_collector",
        "multicloud_manager",
    ];
    let entries = keys
        .iter()
        .enumerate()
        .map(|(i, key)| ManifestEntry {
            image_key: key.to_string(),
            image_name: key.replace('_', "-"),
            image_digest: format!("sha256:{:04}", i),
            image_repository: "quay.io/open-cluster-management".to_string(),
            ..Default::default()
        })
        .collect();

    ImageContext::new(
        ManifestStore::from_entries(entries),
        VersionCatalog::new(),
        ComponentImageKeyMap::from_embedded().unwrap(),
    )
}

#[test]
fn test_render_all_components() {
    let config = KlusterletAddonConfig::from_yaml(CONFIG_ALL_ENABLED).unwrap();
    let ctx = full_context();
    let resolver = ctx.resolver();

    let descriptors = ComponentResourceBuilder::new(&resolver)
        .build_enabled(&config, ADDON_NAMESPACE)
        .unwrap();
    assert_eq!(descriptors.len(), COMPONENT_TYPES.len());

    let expected = [
        ("appmgr", "ApplicationManager"),
        ("certpolicyctrl", "CertPolicyController"),
        ("iampolicyctrl", "IAMPolicyController"),
        ("policyctrl", "PolicyController"),
        ("search", "SearchCollector"),
        ("workmgr", "WorkManager"),
    ];

    for (descriptor, (short, kind)) in descriptors.iter().zip(expected) {
        let json = serde_json::to_string(descriptor).unwrap();
        for needle in [
            format!(r#""kind":"{}""#, kind),
            format!(r#""name":"klusterlet-addon-{}""#, short),
            format!(r#""namespace":"{}""#, ADDON_NAMESPACE),
            format!(r#""hubKubeconfigSecret":"{}-hub-kubeconfig""#, short),
            r#""clusterName":"managed-1""#.to_string(),
            r#""imagePullSecret":"multiclusterhub-operator-pull-secret""#.to_string(),
        ] {
            assert!(json.contains(&needle), "{} missing {}", json, needle);
        }
    }
}

#[test]
fn test_work_manager_and_service_registry_share_image() {
    let config = KlusterletAddonConfig::from_yaml(CONFIG_ALL_ENABLED).unwrap();
    let ctx = full_context();
    let resolver = ctx.resolver();

    let descriptors = ComponentResourceBuilder::new(&resolver)
        .build_enabled(&config, ADDON_NAMESPACE)
        .unwrap();
    let workmgr = descriptors.last().unwrap();
    assert_eq!(workmgr.kind, "WorkManager");
    assert_eq!(
        workmgr.image("multicloud_manager"),
        Some("quay.io/open-cluster-management/multicloud-manager@sha256:0008")
    );
}

#[test]
fn test_descriptor_yaml_round_trip() {
    let config = KlusterletAddonConfig::from_yaml(CONFIG_ALL_ENABLED).unwrap();
    let ctx = full_context();
    let resolver = ctx.resolver();

    let descriptors = ComponentResourceBuilder::new(&resolver)
        .build_enabled(&config, ADDON_NAMESPACE)
        .unwrap();
    let yaml = serde_yaml_ng::to_string(&descriptors[0]).unwrap();
    let parsed: klusterlet_core::ComponentDescriptor = serde_yaml_ng::from_str(&yaml).unwrap();
    assert_eq!(parsed, descriptors[0]);
}

#[test]
fn test_empty_catalog_produces_no_descriptors() {
    let config = KlusterletAddonConfig::from_yaml(CONFIG_ALL_ENABLED).unwrap();
    let ctx = ImageContext::new(
        ManifestStore::new(),
        VersionCatalog::new(),
        ComponentImageKeyMap::from_embedded().unwrap(),
    );
    let resolver = ctx.resolver();

    let result = ComponentResourceBuilder::new(&resolver).build_enabled(&config, ADDON_NAMESPACE);
    assert!(matches!(result, Err(Error::ImageNotFound { .. })));
}
