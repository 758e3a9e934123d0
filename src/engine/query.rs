//! engine::query
//!
//! Read-only flattening queries against the registry.
//!
//! All queries are idempotent and never mutate tree state; they take
//! per-organization read locks only. Output ordering is deterministic:
//! organizations in id order, roots and children in name order,
//! pre-order within a subtree.

use rayon::prelude::*;

use crate::core::error::FolderError;
use crate::core::types::{Folder, FolderName, OrgId};

use super::Registry;

impl Registry {
    /// All folders belonging to one organization.
    ///
    /// # Errors
    ///
    /// `OrganizationNotFound` if the organization is not in the
    /// registry.
    pub fn folders_by_org(&self, org_id: OrgId) -> Result<Vec<Folder>, FolderError> {
        Ok(self.org(org_id)?.read().collect_all())
    }

    /// The subtree rooted at `name` within one organization, the
    /// target folder included.
    ///
    /// # Errors
    ///
    /// - `OrganizationNotFound` if the organization is not in the
    ///   registry
    /// - `FolderWrongOrganization` if the name exists, but only in a
    ///   different organization
    /// - `FolderNotFound` if the name exists in no organization
    pub fn child_folders(
        &self,
        org_id: OrgId,
        name: &FolderName,
    ) -> Result<Vec<Folder>, FolderError> {
        let org = self.org(org_id)?;
        if let Some(folders) = org.read().collect_subtree(name) {
            return Ok(folders);
        }

        // Not in the requested organization; search the rest to pick
        // the right error.
        match self.find_org_of(name) {
            Some(_) => Err(FolderError::FolderWrongOrganization(name.clone())),
            None => Err(FolderError::FolderNotFound(name.clone())),
        }
    }

    /// Every folder in the registry, organizations in id order.
    ///
    /// Organizations are flattened in parallel and concatenated in id
    /// order.
    pub fn all_folders(&self) -> Vec<Folder> {
        self.orgs
            .par_iter()
            .map(|(org_id, lock)| (*org_id, lock.read().collect_all()))
            .collect::<std::collections::BTreeMap<_, _>>()
            .into_values()
            .flatten()
            .collect()
    }
}
