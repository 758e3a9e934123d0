//! cli
//!
//! Command-line interface layer for Grove.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the folder dataset (config file, JSON data, or generator)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds the
//! registry once, and dispatches to [`commands`]. All tree state lives
//! in the [`engine`](crate::engine); handlers only call the engine's
//! public operations and render output.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::engine::Registry;
use crate::sample;
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    // Completion needs no dataset.
    if let Some(args::Command::Completion { shell }) = &cli.command {
        return commands::completion(*shell);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut sample_config = config.sample.clone();
    if let Some(seed) = cli.seed {
        sample_config.seed = seed;
    }
    if let Some(orgs) = cli.orgs {
        sample_config.orgs = orgs;
    }
    if let Some(folders_per_org) = cli.folders_per_org {
        sample_config.folders_per_org = folders_per_org;
    }

    let folders = match cli.data.clone().or_else(|| config.data_file.clone()) {
        Some(path) => sample::load_json(&path)
            .with_context(|| format!("failed to load folder data from '{}'", path.display()))?,
        None => sample::generate(&sample_config),
    };
    output::debug(format!("resolved {} folders", folders.len()), verbosity);

    let registry = Registry::new(folders)?;
    output::debug(
        format!("built registry with {} organizations", registry.org_count()),
        verbosity,
    );

    commands::dispatch(
        cli.command.unwrap_or(args::Command::Shell),
        &registry,
        verbosity,
    )
}
