//! engine
//!
//! The folder registry: construction, queries, and moves.
//!
//! # Architecture
//!
//! The [`Registry`] owns one [`OrgTree`](crate::core::tree::OrgTree)
//! per organization, each behind its own reader-writer lock. Queries
//! take read locks; [`Registry::move_folder`] takes the owning
//! organization's write lock for the duration of
//! detach + reattach + path-rewrite.
//!
//! # Construction
//!
//! The registry is built once from a flat folder list. Organizations
//! share no state, so each organization's tree is built by its own
//! rayon task; the completed trees are merged into the registry map by
//! the single collecting owner before any query is possible. A
//! construction error in any organization aborts the whole build.
//!
//! # Modules
//!
//! - [`query`] - Read-only flattening queries
//! - [`move_folder`] - The move/reparent operation

pub mod move_folder;
pub mod query;

use std::collections::BTreeMap;

use parking_lot::RwLock;
use rayon::prelude::*;

use crate::core::error::FolderError;
use crate::core::tree::OrgTree;
use crate::core::types::{Folder, FolderName, OrgId};

/// The per-organization folder registry.
///
/// Built once from the full input folder list; afterwards the only
/// mutation is [`Registry::move_folder`]. Folders are never created or
/// deleted after construction — only relocated.
///
/// # Example
///
/// ```
/// use grove::core::types::{Folder, FolderName, OrgId};
/// use grove::core::path::FolderPath;
/// use grove::engine::Registry;
///
/// let org = OrgId::parse("c1556e17-b7c0-45a3-a6ae-9546248fb17a").unwrap();
/// let folders = vec![
///     Folder::new(
///         FolderName::new("alpha").unwrap(),
///         org,
///         FolderPath::new("alpha").unwrap(),
///     ),
/// ];
/// let registry = Registry::new(folders).unwrap();
/// assert_eq!(registry.folders_by_org(org).unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct Registry {
    orgs: BTreeMap<OrgId, RwLock<OrgTree>>,
}

impl Registry {
    /// Build the registry from an unordered folder list.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPath` or `DuplicateFolder` if any
    /// organization's folder list does not form a well-formed tree.
    pub fn new(folders: Vec<Folder>) -> Result<Self, FolderError> {
        let mut by_org: BTreeMap<OrgId, Vec<Folder>> = BTreeMap::new();
        for folder in folders {
            by_org.entry(folder.org_id).or_default().push(folder);
        }

        let partitions: Vec<(OrgId, Vec<Folder>)> = by_org.into_iter().collect();
        let orgs = partitions
            .into_par_iter()
            .map(|(org_id, folders)| {
                OrgTree::build(org_id, folders).map(|tree| (org_id, RwLock::new(tree)))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self { orgs })
    }

    /// Organization ids known to the registry, in id order.
    pub fn org_ids(&self) -> Vec<OrgId> {
        self.orgs.keys().copied().collect()
    }

    /// Number of organizations.
    pub fn org_count(&self) -> usize {
        self.orgs.len()
    }

    /// Look up an organization's tree.
    fn org(&self, org_id: OrgId) -> Result<&RwLock<OrgTree>, FolderError> {
        self.orgs
            .get(&org_id)
            .ok_or(FolderError::OrganizationNotFound(org_id))
    }

    /// Find which organization, if any, holds a folder with this name.
    ///
    /// Organizations are searched in parallel with first-match-wins
    /// semantics; names are unique per organization, and this is used
    /// only to distinguish "does not exist anywhere" from "exists in a
    /// different organization". Read-only.
    fn find_org_of(&self, name: &FolderName) -> Option<OrgId> {
        self.orgs
            .par_iter()
            .find_map_any(|(org_id, lock)| lock.read().contains(name).then_some(*org_id))
    }
}
