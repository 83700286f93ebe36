//! Type definitions for addon configuration and component descriptors

mod config_types;
mod descriptor_types;

pub use config_types::*;
pub use descriptor_types::*;
