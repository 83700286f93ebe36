//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use klusterlet_image::DEFAULT_VERSION_CONSTRAINT;

/// klusterlet-addon - resolve addon images and render component resources
#[derive(Parser, Debug)]
#[command(name = "klusterlet-addon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub images: ImageArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where image manifests come from and how references are composed
#[derive(Args, Debug, Clone)]
pub struct ImageArgs {
    /// Base directory containing image-manifests/
    #[arg(long, env = "IMAGE_MANIFEST_PATH", global = true)]
    pub manifest_path: Option<Utf8PathBuf>,

    /// Release whose manifest is loaded (defaults to the config's spec.version,
    /// then the highest available release)
    #[arg(long, global = true)]
    pub release: Option<String>,

    /// Minimum release version listed as available
    #[arg(long, default_value = DEFAULT_VERSION_CONSTRAINT, global = true)]
    pub constraint: String,

    /// YAML file mapping component names to image keys (replaces the built-in map)
    #[arg(long, global = true)]
    pub component_map: Option<Utf8PathBuf>,

    /// Compose tag references for manifest entries without a digest
    #[arg(long, global = true)]
    pub allow_tag_fallback: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render resources for every enabled component of an addon config
    Render(RenderArgs),

    /// Resolve the image reference of one component
    Resolve(ResolveArgs),

    /// List release versions with an image manifest
    Versions(ListArgs),

    /// List the images of the loaded release manifest
    Images(ListArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the KlusterletAddonConfig YAML
    #[arg(short, long)]
    pub config: Utf8PathBuf,

    /// Namespace the component resources are created in
    #[arg(short, long, default_value = "open-cluster-management-agent-addon")]
    pub namespace: String,

    /// Render only this component (short name, e.g. "workmgr")
    #[arg(long)]
    pub component: Option<String>,

    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Component name (e.g., "subscription", "search-collector")
    pub component: String,

    /// Registry root overriding the manifest's
    #[arg(long, default_value = "")]
    pub registry: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
