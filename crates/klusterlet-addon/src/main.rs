//! klusterlet-addon CLI - image resolution and component resource rendering
//!
//! This is the main entry point for the klusterlet-addon command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command
    match cli.command {
        Commands::Render(args) => commands::render::run(args, &cli.images),
        Commands::Resolve(args) => commands::resolve::run(args, &cli.images),
        Commands::Versions(args) => commands::versions::run(args, &cli.images),
        Commands::Images(args) => commands::images::run(args, &cli.images),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Startup degradation is reported at warn level
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
