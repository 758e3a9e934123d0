//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the engine to execute the operation
//! 3. Formats and displays output
//!
//! Query results go to stdout unconditionally; notices and errors flow
//! through [`crate::ui::output`] so `--quiet` suppresses decoration
//! without hiding data.

mod completion;
mod move_cmd;
mod queries;
mod sample_cmd;
mod shell;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use move_cmd::move_folder;
pub use queries::{children, get, list};
pub use sample_cmd::sample;
pub use shell::shell;

use anyhow::Result;

use crate::cli::args::Command;
use crate::engine::Registry;
use crate::ui::output::Verbosity;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, registry: &Registry, verbosity: Verbosity) -> Result<()> {
    match command {
        Command::Shell => shell(registry, verbosity),
        Command::List => list(registry),
        Command::Get { org_id } => get(registry, org_id),
        Command::Children { org_id, name } => children(registry, org_id, &name),
        Command::Move { src, dst } => move_folder(registry, &src, &dst, verbosity),
        Command::Sample => sample(registry),
        Command::Completion { shell } => completion(shell),
    }
}
