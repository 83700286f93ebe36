//! Images command

use super::{image_context, loaded_release};
use crate::cli::{ImageArgs, ListArgs};
use crate::output;
use anyhow::Result;
use klusterlet_image::ManifestEntry;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ImageRow {
    key: String,
    name: String,
    tag: String,
    digest: String,
    repository: String,
}

impl From<&ManifestEntry> for ImageRow {
    fn from(entry: &ManifestEntry) -> Self {
        Self {
            key: entry.image_key.clone(),
            name: entry.image_name.clone(),
            tag: entry.image_tag.clone(),
            digest: entry.image_digest.clone(),
            repository: entry.image_repository.clone(),
        }
    }
}

pub fn run(args: ListArgs, image_args: &ImageArgs) -> Result<()> {
    let ctx = image_context(image_args, None)?;
    let entries = ctx.store().entries();

    if args.json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        output::warning(&format!(
            "No images loaded for release {}",
            loaded_release(&ctx)
        ));
        return Ok(());
    }

    let mut table = Table::new(entries.iter().map(ImageRow::from));
    table.with(Style::sharp());
    println!("{}", table);

    Ok(())
}
