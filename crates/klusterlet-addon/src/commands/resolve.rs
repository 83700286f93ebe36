//! Resolve command

use super::{image_context, loaded_release};
use crate::cli::{ImageArgs, ResolveArgs};
use crate::output;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct ResolveJson {
    component: String,
    image_key: String,
    reference: String,
}

pub fn run(args: ResolveArgs, image_args: &ImageArgs) -> Result<()> {
    let ctx = image_context(image_args, None)?;

    let resolved = ctx.resolver().resolve(&args.component, &args.registry)?;

    if args.json {
        let json = ResolveJson {
            component: args.component,
            image_key: resolved.image_key,
            reference: resolved.reference.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        output::success(&format!(
            "Resolved {} (release {})",
            args.component,
            loaded_release(&ctx)
        ));
        output::kv("Image key", &resolved.image_key);
        output::kv("Reference", &resolved.reference.to_string());
    }

    Ok(())
}
