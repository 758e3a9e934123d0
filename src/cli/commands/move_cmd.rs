//! move command - Relocate a folder under a new parent
//!
//! Moves the source folder and its entire subtree under the
//! destination, rewriting every path in the moved subtree. The engine
//! validates the request first; a failed move leaves the tree
//! unchanged.

use anyhow::Result;

use crate::core::types::FolderName;
use crate::engine::Registry;
use crate::ui::output::{self, render_folders, Verbosity};

/// Move `src` (with its subtree) under `dst` and print the resulting
/// registry state.
pub fn move_folder(
    registry: &Registry,
    src: &FolderName,
    dst: &FolderName,
    verbosity: Verbosity,
) -> Result<()> {
    let folders = registry.move_folder(src, dst)?;
    output::print(format!("moved '{src}' under '{dst}'"), verbosity);
    println!("{}", render_folders(&folders));
    Ok(())
}
