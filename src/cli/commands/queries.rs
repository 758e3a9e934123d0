//! list, get and children commands - Read-only flattening queries

use anyhow::Result;

use crate::core::types::{FolderName, OrgId};
use crate::engine::Registry;
use crate::ui::output::render_folders;

/// Print every folder in the registry.
pub fn list(registry: &Registry) -> Result<()> {
    println!("{}", render_folders(&registry.all_folders()));
    Ok(())
}

/// Print all folders of one organization.
pub fn get(registry: &Registry, org_id: OrgId) -> Result<()> {
    let folders = registry.folders_by_org(org_id)?;
    println!("{}", render_folders(&folders));
    Ok(())
}

/// Print a folder's subtree within one organization, the folder
/// itself included.
pub fn children(registry: &Registry, org_id: OrgId, name: &FolderName) -> Result<()> {
    let folders = registry.child_folders(org_id, name)?;
    println!("{}", render_folders(&folders));
    Ok(())
}
