//! Addon component types
//!
//! Every managed component is described by a [`ComponentType`]: the short
//! name used in resource and secret names, the resource kind, the images it
//! needs, and the config flag that enables it.

use klusterlet_core::KlusterletAddonConfig;

/// Static description of one addon component type
#[derive(Debug, Clone, Copy)]
pub struct ComponentType {
    /// Short name (e.g., "appmgr")
    pub short_name: &'static str,

    /// Resource kind (e.g., "ApplicationManager")
    pub kind: &'static str,

    /// Component names passed to the image resolver, one per required image
    pub images: &'static [&'static str],

    enabled: fn(&KlusterletAddonConfig) -> bool,
}

impl ComponentType {
    /// Whether `config` asks for this component
    pub fn is_enabled(&self, config: &KlusterletAddonConfig) -> bool {
        (self.enabled)(config)
    }

    /// Resource name, `klusterlet-addon-<short-name>`
    pub fn resource_name(&self) -> String {
        format!("klusterlet-addon-{}", self.short_name)
    }

    /// Name of the secret holding the hub kubeconfig
    pub fn hub_kubeconfig_secret(&self) -> String {
        format!("{}-hub-kubeconfig", self.short_name)
    }
}

pub const APPLICATION_MANAGER: ComponentType = ComponentType {
    short_name: "appmgr",
    kind: "ApplicationManager",
    images: &["subscription"],
    enabled: application_manager_enabled,
};

pub const CERT_POLICY_CONTROLLER: ComponentType = ComponentType {
    short_name: "certpolicyctrl",
    kind: "CertPolicyController",
    images: &["cert-policy-controller"],
    enabled: cert_policy_controller_enabled,
};

pub const IAM_POLICY_CONTROLLER: ComponentType = ComponentType {
    short_name: "iampolicyctrl",
    kind: "IAMPolicyController",
    images: &["iam-policy-controller"],
    enabled: iam_policy_controller_enabled,
};

pub const POLICY_CONTROLLER: ComponentType = ComponentType {
    short_name: "policyctrl",
    kind: "PolicyController",
    images: &[
        "policy-controller",
        "governance-policy-spec-sync",
        "governance-policy-status-sync",
        "governance-policy-template-sync",
    ],
    enabled: policy_controller_enabled,
};

pub const SEARCH_COLLECTOR: ComponentType = ComponentType {
    short_name: "search",
    kind: "SearchCollector",
    images: &["search-collector"],
    enabled: search_collector_enabled,
};

pub const WORK_MANAGER: ComponentType = ComponentType {
    short_name: "workmgr",
    kind: "WorkManager",
    images: &["work-manager"],
    enabled: work_manager_enabled,
};

fn application_manager_enabled(c: &KlusterletAddonConfig) -> bool {
    c.spec.application_manager.enabled
}

fn cert_policy_controller_enabled(c: &KlusterletAddonConfig) -> bool {
    c.spec.cert_policy_controller.enabled
}

fn iam_policy_controller_enabled(c: &KlusterletAddonConfig) -> bool {
    c.spec.iam_policy_controller.enabled
}

fn policy_controller_enabled(c: &KlusterletAddonConfig) -> bool {
    c.spec.policy_controller.enabled
}

fn search_collector_enabled(c: &KlusterletAddonConfig) -> bool {
    c.spec.search_collector.enabled
}

fn work_manager_enabled(c: &KlusterletAddonConfig) -> bool {
    c.spec.work_manager.enabled
}

/// All component types, in build order
pub const COMPONENT_TYPES: &[ComponentType] = &[
    APPLICATION_MANAGER,
    CERT_POLICY_CONTROLLER,
    IAM_POLICY_CONTROLLER,
    POLICY_CONTROLLER,
    SEARCH_COLLECTOR,
    WORK_MANAGER,
];

/// Look up a component type by short name
pub fn find_component(short_name: &str) -> Option<&'static ComponentType> {
    COMPONENT_TYPES.iter().find(|c| c.short_name == short_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_conventions() {
        assert_eq!(APPLICATION_MANAGER.resource_name(), "klusterlet-addon-appmgr");
        assert_eq!(
            APPLICATION_MANAGER.hub_kubeconfig_secret(),
            "appmgr-hub-kubeconfig"
        );
        assert_eq!(SEARCH_COLLECTOR.resource_name(), "klusterlet-addon-search");
    }

    #[test]
    fn test_enablement_follows_config() {
        let mut config = KlusterletAddonConfig::default();
        assert!(!APPLICATION_MANAGER.is_enabled(&config));

        config.spec.application_manager.enabled = true;
        config.spec.iam_policy_controller.enabled = true;
        assert!(APPLICATION_MANAGER.is_enabled(&config));
        assert!(IAM_POLICY_CONTROLLER.is_enabled(&config));
        assert!(!CERT_POLICY_CONTROLLER.is_enabled(&config));
    }

    #[test]
    fn test_find_component() {
        assert_eq!(find_component("policyctrl").unwrap().kind, "PolicyController");
        assert_eq!(find_component("policyctrl").unwrap().images.len(), 4);
        assert!(find_component("cisctrl").is_none());
    }

    #[test]
    fn test_short_names_unique() {
        let mut names: Vec<_> = COMPONENT_TYPES.iter().map(|c| c.short_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), COMPONENT_TYPES.len());
    }
}
