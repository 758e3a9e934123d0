//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--config <path>`: Use this config file instead of the standard locations
//! - `--data <path>`: Load folders from a JSON file instead of generating
//! - `--seed <n>` / `--orgs <n>` / `--folders-per-org <n>`: Sample generator overrides
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::types::{FolderName, OrgId};

/// Grove - In-memory folder hierarchy engine with a command shell
#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the standard locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Load folders from a JSON file instead of generating sample data
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Sample generator seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of sample organizations
    #[arg(long, global = true)]
    pub orgs: Option<usize>,

    /// Number of sample folders per organization
    #[arg(long, global = true)]
    pub folders_per_org: Option<usize>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
///
/// With no subcommand, `grove` starts the interactive shell.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive shell (default)
    Shell,

    /// List every folder in the registry
    List,

    /// List the folders of one organization
    Get {
        /// Organization id
        org_id: OrgId,
    },

    /// List a folder's subtree within one organization
    Children {
        /// Organization id
        org_id: OrgId,
        /// Folder name
        name: FolderName,
    },

    /// Move a folder (with its subtree) under a new parent
    Move {
        /// Folder to move
        src: FolderName,
        /// New parent folder
        dst: FolderName,
    },

    /// Print the loaded dataset as JSON
    Sample,

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        shell: Shell,
    },
}

/// Shells supported by the completion command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
