//! engine::move_folder
//!
//! The move/reparent operation.
//!
//! # Validation order
//!
//! Each check is a distinct failure, applied in order:
//! 1. source == destination → `MoveToSelf`
//! 2. source not found anywhere → `SourceNotFound`
//! 3. destination not found anywhere → `DestinationNotFound`
//! 4. different organizations → `CrossOrganizationMove`
//! 5. destination inside the source's subtree → `MoveIntoOwnSubtree`
//!
//! Cycle prevention relies on paths recording the full ancestor chain:
//! with names unique per organization, the destination lies in the
//! source's subtree exactly when the source's name appears among the
//! destination path's segments.
//!
//! # Atomicity
//!
//! Validation precedes mutation; a failed move leaves every tree
//! unchanged. The mutation itself runs under the owning organization's
//! exclusive lock, so no concurrent query observes a folder detached
//! from the structure.

use crate::core::error::FolderError;
use crate::core::types::{Folder, FolderName};

use super::Registry;

impl Registry {
    /// Move the folder `name` (with its entire subtree) under `dst`,
    /// rewriting every path in the moved subtree.
    ///
    /// Returns the full flattened folder list for the whole registry
    /// reflecting the new state.
    ///
    /// # Errors
    ///
    /// See the module docs for the validation order.
    pub fn move_folder(
        &self,
        name: &FolderName,
        dst: &FolderName,
    ) -> Result<Vec<Folder>, FolderError> {
        if name == dst {
            return Err(FolderError::MoveToSelf);
        }

        let src_org = self
            .find_org_of(name)
            .ok_or_else(|| FolderError::SourceNotFound(name.clone()))?;
        let dst_org = self
            .find_org_of(dst)
            .ok_or_else(|| FolderError::DestinationNotFound(dst.clone()))?;
        if src_org != dst_org {
            return Err(FolderError::CrossOrganizationMove);
        }

        {
            let mut tree = self.org(src_org)?.write();

            // Re-check both ends under the exclusive lock.
            if !tree.contains(name) {
                return Err(FolderError::SourceNotFound(name.clone()));
            }
            let dst_inside_source = match tree.get(dst) {
                Some(node) => node.folder().path.contains_segment(name),
                None => return Err(FolderError::DestinationNotFound(dst.clone())),
            };
            if dst_inside_source {
                return Err(FolderError::MoveIntoOwnSubtree { name: name.clone() });
            }

            tree.reparent(name, dst)?;
        }

        Ok(self.all_folders())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path::FolderPath;
    use crate::core::types::OrgId;

    fn org(raw: &str) -> OrgId {
        OrgId::parse(raw).unwrap()
    }

    fn folder(org_id: OrgId, path: &str) -> Folder {
        let path = FolderPath::new(path).unwrap();
        let name = FolderName::new(path.leaf()).unwrap();
        Folder::new(name, org_id, path)
    }

    fn name(s: &str) -> FolderName {
        FolderName::new(s).unwrap()
    }

    const FIRST_ORG: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";
    const SECOND_ORG: &str = "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7";

    fn paths_for(folders: &[Folder], org_id: OrgId) -> Vec<String> {
        folders
            .iter()
            .filter(|f| f.org_id == org_id)
            .map(|f| f.path.to_string())
            .collect()
    }

    #[test]
    fn move_rewrites_subtree_paths() {
        let first = org(FIRST_ORG);
        let registry = Registry::new(vec![
            folder(first, "alpha"),
            folder(first, "bravo"),
            folder(first, "alpha.charlie"),
            folder(first, "alpha.charlie.delta"),
        ])
        .unwrap();

        let result = registry.move_folder(&name("charlie"), &name("bravo")).unwrap();
        assert_eq!(
            paths_for(&result, first),
            vec!["alpha", "bravo", "bravo.charlie", "bravo.charlie.delta"]
        );
    }

    #[test]
    fn move_to_self_fails() {
        let first = org(FIRST_ORG);
        let registry = Registry::new(vec![folder(first, "alpha")]).unwrap();
        assert_eq!(
            registry.move_folder(&name("alpha"), &name("alpha")).unwrap_err(),
            FolderError::MoveToSelf
        );
    }

    #[test]
    fn move_into_own_subtree_fails() {
        let first = org(FIRST_ORG);
        let registry = Registry::new(vec![
            folder(first, "alpha"),
            folder(first, "alpha.charlie"),
        ])
        .unwrap();

        assert_eq!(
            registry.move_folder(&name("alpha"), &name("charlie")).unwrap_err(),
            FolderError::MoveIntoOwnSubtree { name: name("alpha") }
        );
        // The tree is unchanged after the failed move
        let paths: Vec<_> = registry
            .all_folders()
            .iter()
            .map(|f| f.path.to_string())
            .collect();
        assert_eq!(paths, vec!["alpha", "alpha.charlie"]);
    }

    #[test]
    fn cross_org_move_fails() {
        let first = org(FIRST_ORG);
        let second = org(SECOND_ORG);
        let registry = Registry::new(vec![
            folder(first, "alpha"),
            folder(second, "bravo"),
        ])
        .unwrap();

        assert_eq!(
            registry.move_folder(&name("alpha"), &name("bravo")).unwrap_err(),
            FolderError::CrossOrganizationMove
        );
    }

    #[test]
    fn missing_endpoints_are_distinct_errors() {
        let first = org(FIRST_ORG);
        let registry = Registry::new(vec![
            folder(first, "alpha"),
            folder(first, "bravo"),
        ])
        .unwrap();

        assert_eq!(
            registry.move_folder(&name("zulu"), &name("bravo")).unwrap_err(),
            FolderError::SourceNotFound(name("zulu"))
        );
        assert_eq!(
            registry.move_folder(&name("bravo"), &name("zulu")).unwrap_err(),
            FolderError::DestinationNotFound(name("zulu"))
        );
    }

    #[test]
    fn move_returns_whole_registry() {
        let first = org(FIRST_ORG);
        let second = org(SECOND_ORG);
        let registry = Registry::new(vec![
            folder(first, "alpha"),
            folder(first, "bravo"),
            folder(second, "charlie"),
        ])
        .unwrap();

        let result = registry.move_folder(&name("alpha"), &name("bravo")).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(paths_for(&result, first), vec!["bravo", "bravo.alpha"]);
        assert_eq!(paths_for(&result, second), vec!["charlie"]);
    }
}
