//! shell command - Line-oriented interactive shell
//!
//! Translates text commands into engine calls and prints results or
//! error messages verbatim:
//!
//! ```text
//! list                         list all folders
//! get <orgID>                  folders of one organization
//! children <orgID> <name>      a folder's subtree
//! move <src> <dst>             relocate a folder
//! help                         show this list
//! exit | quit | q              leave the shell
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};

use crate::core::types::{FolderName, OrgId};
use crate::engine::Registry;
use crate::ui::output::{self, render_folders, Verbosity};

const USAGE: &str = "commands: list | get <orgID> | children <orgID> <name> | move <src> <dst> | help | exit";

/// Run the interactive shell until `exit` or end of input.
pub fn shell(registry: &Registry, verbosity: Verbosity) -> Result<()> {
    output::print("grove shell - folder hierarchy explorer", verbosity);
    output::print(USAGE, verbosity);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // end of input
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            continue;
        };

        let outcome = match command {
            "list" => Some(cmd_list(registry)),
            "get" => Some(cmd_get(registry, &tokens[1..])),
            "children" => Some(cmd_children(registry, &tokens[1..])),
            "move" => Some(cmd_move(registry, &tokens[1..])),
            "help" => {
                output::print(USAGE, verbosity);
                None
            }
            "exit" | "quit" | "q" => {
                output::print("exiting", verbosity);
                break;
            }
            other => {
                output::error(format!("unknown command: {other}"));
                None
            }
        };

        match outcome {
            Some(Ok(rendered)) => println!("{rendered}"),
            Some(Err(err)) => output::error(format!("{err:#}")),
            None => {}
        }
    }

    Ok(())
}

fn cmd_list(registry: &Registry) -> Result<String> {
    Ok(render_folders(&registry.all_folders()))
}

fn cmd_get(registry: &Registry, args: &[&str]) -> Result<String> {
    let raw = args.first().context("usage: get <orgID>")?;
    let org_id: OrgId = raw.parse()?;
    Ok(render_folders(&registry.folders_by_org(org_id)?))
}

fn cmd_children(registry: &Registry, args: &[&str]) -> Result<String> {
    let (raw_org, raw_name) = match args {
        [org, name, ..] => (org, name),
        _ => anyhow::bail!("usage: children <orgID> <name>"),
    };
    let org_id: OrgId = raw_org.parse()?;
    let name: FolderName = raw_name.parse()?;
    Ok(render_folders(&registry.child_folders(org_id, &name)?))
}

fn cmd_move(registry: &Registry, args: &[&str]) -> Result<String> {
    let (raw_src, raw_dst) = match args {
        [src, dst, ..] => (src, dst),
        _ => anyhow::bail!("usage: move <src> <dst>"),
    };
    let src: FolderName = raw_src.parse()?;
    let dst: FolderName = raw_dst.parse()?;
    Ok(render_folders(&registry.move_folder(&src, &dst)?))
}
