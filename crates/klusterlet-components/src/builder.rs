//! Component resource builder
//!
//! Produces one [`ComponentDescriptor`] per component type from the addon
//! config, resolving every image the component needs. A descriptor is only
//! returned when all of its images resolved.

use crate::component::{ComponentType, COMPONENT_TYPES};
use klusterlet_core::types::{DescriptorSpec, GlobalValues, ObjectMeta, AGENT_API_VERSION};
use klusterlet_core::{ComponentDescriptor, KlusterletAddonConfig, Result};
use klusterlet_image::ImageResolver;
use std::collections::BTreeMap;
use tracing::{debug, error};

/// Builds component descriptors against one image resolver
pub struct ComponentResourceBuilder<'a> {
    resolver: &'a ImageResolver<'a>,
}

impl<'a> ComponentResourceBuilder<'a> {
    pub fn new(resolver: &'a ImageResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Build the descriptor for `component`
    ///
    /// Callers check [`ComponentType::is_enabled`] first; this does not.
    pub fn build(
        &self,
        component: &ComponentType,
        config: &KlusterletAddonConfig,
        namespace: &str,
    ) -> Result<ComponentDescriptor> {
        let labels = BTreeMap::from([("app".to_string(), config.name().to_string())]);

        let mut global = GlobalValues {
            image_pull_policy: config.spec.image_pull_policy,
            image_pull_secret: config.spec.image_pull_secret.clone(),
            image_overrides: BTreeMap::new(),
        };

        for image in component.images {
            let resolved = self
                .resolver
                .resolve(image, &config.spec.image_registry)
                .inspect_err(|e| {
                    error!(
                        "Fail to get image {} for component {}: {}",
                        image, component.short_name, e
                    )
                })?;
            global
                .image_overrides
                .insert(resolved.image_key, resolved.reference.to_string());
        }

        let name = component.resource_name();
        debug!("Built {} {} in {}", component.kind, name, namespace);

        Ok(ComponentDescriptor {
            api_version: AGENT_API_VERSION.to_string(),
            kind: component.kind.to_string(),
            metadata: ObjectMeta {
                name: name.clone(),
                namespace: namespace.to_string(),
                labels,
            },
            spec: DescriptorSpec {
                full_name_override: name,
                hub_kubeconfig_secret: component.hub_kubeconfig_secret(),
                cluster_name: config.spec.cluster_name.clone(),
                cluster_namespace: config.spec.cluster_namespace.clone(),
                global,
            },
        })
    }

    /// Build descriptors for every enabled component type, in build order
    ///
    /// The first failure aborts the whole call.
    pub fn build_enabled(
        &self,
        config: &KlusterletAddonConfig,
        namespace: &str,
    ) -> Result<Vec<ComponentDescriptor>> {
        COMPONENT_TYPES
            .iter()
            .filter(|c| {
                let enabled = c.is_enabled(config);
                if !enabled {
                    debug!("Component {} disabled, skipping", c.short_name);
                }
                enabled
            })
            .map(|c| self.build(c, config, namespace))
            .collect()
    }
}
