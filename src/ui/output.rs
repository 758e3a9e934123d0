//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Engine errors are printed verbatim on the error channel so shell
//! users see exactly what went wrong.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::core::types::{Folder, OrgId};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Render a flattened folder list as an indented tree, grouped by
/// organization.
///
/// Folders are sorted by path within each organization, which places
/// every parent directly above its subtree. Indentation is relative
/// to the shallowest folder in the group, so subtree query results
/// start at the left margin.
pub fn render_folders(folders: &[Folder]) -> String {
    if folders.is_empty() {
        return "(no folders)".to_string();
    }

    let mut by_org: BTreeMap<OrgId, Vec<&Folder>> = BTreeMap::new();
    for folder in folders {
        by_org.entry(folder.org_id).or_default().push(folder);
    }

    let mut out = String::new();
    for (org_id, mut group) in by_org {
        group.sort_by(|a, b| a.path.cmp(&b.path));
        let min_depth = group
            .iter()
            .map(|f| f.path.depth())
            .min()
            .unwrap_or(1);

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("org {org_id}\n"));
        for folder in group {
            let indent = "  ".repeat(folder.path.depth() - min_depth + 1);
            out.push_str(&format!("{indent}- {}\n", folder.name));
        }
    }
    // Callers print the rendering as a line; drop the trailing newline.
    out.truncate(out.trim_end().len());
    out
}
