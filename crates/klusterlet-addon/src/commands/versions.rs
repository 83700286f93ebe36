//! Versions command

use super::image_context;
use crate::cli::{ImageArgs, ListArgs};
use anyhow::{Context, Result};

pub fn run(args: ListArgs, image_args: &ImageArgs) -> Result<()> {
    let ctx = image_context(image_args, None)?;

    let mut versions = ctx
        .catalog()
        .available()
        .with_context(|| {
            format!(
                "No release manifests matching '{}' were found",
                image_args.constraint
            )
        })?
        .to_vec();
    // Directory listing order carries no meaning
    versions.sort();

    if args.json {
        let names: Vec<String> = versions.iter().map(ToString::to_string).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for version in &versions {
            println!("{}", version);
        }
    }

    Ok(())
}
