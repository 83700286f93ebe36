//! Render command

use super::{image_context, loaded_release};
use crate::cli::{ImageArgs, RenderArgs};
use anyhow::{bail, Context, Result};
use klusterlet_components::{find_component, ComponentResourceBuilder, COMPONENT_TYPES};
use klusterlet_core::KlusterletAddonConfig;
use tracing::info;

pub fn run(args: RenderArgs, image_args: &ImageArgs) -> Result<()> {
    let config = KlusterletAddonConfig::load(&args.config)
        .with_context(|| format!("Failed to load addon config {}", args.config))?;

    let ctx = image_context(image_args, config.spec.version.as_deref())?;
    let resolver = ctx.resolver();
    let builder = ComponentResourceBuilder::new(&resolver);
    let failed = || {
        format!(
            "Failed to render addon components for {} (release {})",
            config.name(),
            loaded_release(&ctx)
        )
    };

    let descriptors = match args.component.as_deref() {
        Some(short_name) => {
            let component = find_component(short_name).with_context(|| {
                let known: Vec<&str> = COMPONENT_TYPES.iter().map(|c| c.short_name).collect();
                format!(
                    "Unknown component '{}' (expected one of: {})",
                    short_name,
                    known.join(", ")
                )
            })?;
            if !component.is_enabled(&config) {
                bail!(
                    "Component {} is not enabled in {}",
                    short_name,
                    config.name()
                );
            }
            vec![builder
                .build(component, &config, &args.namespace)
                .with_context(failed)?]
        }
        None => builder
            .build_enabled(&config, &args.namespace)
            .with_context(failed)?,
    };

    info!(
        "Rendered {} component resources for {} (release {})",
        descriptors.len(),
        config.name(),
        loaded_release(&ctx)
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else {
        for descriptor in &descriptors {
            println!("---");
            print!("{}", serde_yaml_ng::to_string(descriptor)?);
        }
    }

    Ok(())
}
