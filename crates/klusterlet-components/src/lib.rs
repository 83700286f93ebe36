//! Component resource builders for klusterlet addons
//!
//! One generic builder turns an addon config into the declarative resources
//! for each managed component:
//!
//! ```text
//! ComponentResourceBuilder
//! ├── ApplicationManager   (appmgr)
//! ├── CertPolicyController (certpolicyctrl)
//! ├── IAMPolicyController  (iampolicyctrl)
//! ├── PolicyController     (policyctrl)
//! ├── SearchCollector      (search)
//! └── WorkManager          (workmgr)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use klusterlet_components::ComponentResourceBuilder;
//! use klusterlet_core::{KlusterletAddonConfig, ManifestPaths};
//! use klusterlet_image::{ComponentImageKeyMap, ImageContext, DEFAULT_VERSION_CONSTRAINT};
//!
//! fn main() -> klusterlet_core::Result<()> {
//!     let config = KlusterletAddonConfig::load("addon.yaml".as_ref())?;
//!     let ctx = ImageContext::initialize(
//!         &ManifestPaths::from_env("2.0.0"),
//!         DEFAULT_VERSION_CONSTRAINT,
//!         ComponentImageKeyMap::from_embedded()?,
//!     );
//!
//!     let resolver = ctx.resolver();
//!     let descriptors = ComponentResourceBuilder::new(&resolver)
//!         .build_enabled(&config, "open-cluster-management-agent-addon")?;
//!     println!("{} component resources", descriptors.len());
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod component;

pub use builder::ComponentResourceBuilder;
pub use component::{find_component, ComponentType, COMPONENT_TYPES};
