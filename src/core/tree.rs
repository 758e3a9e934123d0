//! core::tree
//!
//! Per-organization folder tree.
//!
//! # Architecture
//!
//! An [`OrgTree`] holds one organization's folders:
//! - Nodes live in a name→node map (names are unique per organization,
//!   so the name is the node id)
//! - Each node records its folder, a non-owning parent back-reference,
//!   and a name-sorted set of children
//! - Roots (folders whose path has one segment) form a name-sorted set
//!
//! # Invariants
//!
//! - Every node's path segment sequence equals the name-chain from a
//!   root down to the node
//! - Every node is either a root or a child of exactly one parent
//! - Child and root iteration is name-ordered, so traversal output is
//!   deterministic

use std::collections::{BTreeSet, HashMap};

use super::error::FolderError;
use super::types::{Folder, FolderName, OrgId};

/// A node in an organization's folder tree.
///
/// Ownership flows strictly through [`OrgTree`]'s name→node map; the
/// parent link is a plain name used only for detach-by-name.
#[derive(Debug, Clone)]
pub struct FolderNode {
    folder: Folder,
    parent: Option<FolderName>,
    children: BTreeSet<FolderName>,
}

impl FolderNode {
    fn new(folder: Folder, parent: Option<FolderName>) -> Self {
        Self {
            folder,
            parent,
            children: BTreeSet::new(),
        }
    }

    /// The folder record stored at this node.
    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    /// The parent folder's name, or `None` for a root.
    pub fn parent(&self) -> Option<&FolderName> {
        self.parent.as_ref()
    }

    /// Child names in name order.
    pub fn children(&self) -> impl Iterator<Item = &FolderName> {
        self.children.iter()
    }
}

/// One organization's folder tree with O(1) name lookup.
#[derive(Debug, Clone)]
pub struct OrgTree {
    org_id: OrgId,
    roots: BTreeSet<FolderName>,
    nodes: HashMap<FolderName, FolderNode>,
}

impl OrgTree {
    /// Build a tree from one organization's folder records.
    ///
    /// Folders are sorted by path first, which guarantees every
    /// folder's ancestors are inserted before the folder itself (a
    /// parent's path is a strict prefix of its child's and sorts
    /// earlier).
    ///
    /// # Errors
    ///
    /// - `MalformedPath` if a path references a missing intermediate
    ///   folder, or a folder's name differs from its path's final
    ///   segment
    /// - `DuplicateFolder` if a name occurs twice in the organization
    pub fn build(org_id: OrgId, mut folders: Vec<Folder>) -> Result<Self, FolderError> {
        folders.sort_by(|a, b| a.path.cmp(&b.path));

        let mut tree = Self {
            org_id,
            roots: BTreeSet::new(),
            nodes: HashMap::with_capacity(folders.len()),
        };
        for folder in folders {
            tree.insert(folder)?;
        }
        Ok(tree)
    }

    /// The owning organization.
    pub fn org_id(&self) -> OrgId {
        self.org_id
    }

    /// Number of folders in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds no folders.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if a folder with this name exists in the organization.
    pub fn contains(&self, name: &FolderName) -> bool {
        self.nodes.contains_key(name)
    }

    /// Look up a node by name.
    pub fn get(&self, name: &FolderName) -> Option<&FolderNode> {
        self.nodes.get(name)
    }

    /// Insert one folder, walking its path's segment chain from the
    /// root set down through existing children.
    fn insert(&mut self, folder: Folder) -> Result<(), FolderError> {
        if folder.path.leaf() != folder.name.as_str() {
            return Err(FolderError::MalformedPath {
                path: folder.path.clone(),
                reason: format!("final segment does not match folder name '{}'", folder.name),
            });
        }
        if self.nodes.contains_key(&folder.name) {
            return Err(FolderError::DuplicateFolder {
                name: folder.name.clone(),
                org_id: self.org_id,
            });
        }

        let segments: Vec<&str> = folder.path.segments().collect();

        if segments.len() == 1 {
            self.roots.insert(folder.name.clone());
            self.nodes
                .insert(folder.name.clone(), FolderNode::new(folder, None));
            return Ok(());
        }

        // Walk the ancestor chain; every intermediate segment must
        // already be present at its position.
        if !self.roots.contains(segments[0]) {
            return Err(FolderError::MalformedPath {
                path: folder.path.clone(),
                reason: format!("missing intermediate folder '{}'", segments[0]),
            });
        }
        for window in segments[..segments.len() - 1].windows(2) {
            let (parent, child) = (window[0], window[1]);
            let parent_node = self.nodes.get(parent).ok_or_else(|| {
                FolderError::MalformedPath {
                    path: folder.path.clone(),
                    reason: format!("missing intermediate folder '{parent}'"),
                }
            })?;
            if !parent_node.children.contains(child) {
                return Err(FolderError::MalformedPath {
                    path: folder.path.clone(),
                    reason: format!("missing intermediate folder '{child}'"),
                });
            }
        }

        let parent_name = match self.nodes.get_key_value(segments[segments.len() - 2]) {
            Some((key, _)) => key.clone(),
            None => {
                return Err(FolderError::MalformedPath {
                    path: folder.path.clone(),
                    reason: format!(
                        "missing intermediate folder '{}'",
                        segments[segments.len() - 2]
                    ),
                })
            }
        };

        let name = folder.name.clone();
        self.nodes
            .insert(name.clone(), FolderNode::new(folder, Some(parent_name.clone())));
        if let Some(parent_node) = self.nodes.get_mut(&parent_name) {
            parent_node.children.insert(name);
        }
        Ok(())
    }

    /// Detach `name` from its current parent (or the root set), attach
    /// it under `dst`, and rewrite the path of every folder in the
    /// moved subtree.
    ///
    /// Callers are expected to have validated the move; this only
    /// fails if either name is absent from the organization. The tree
    /// is unchanged on failure.
    pub fn reparent(&mut self, name: &FolderName, dst: &FolderName) -> Result<(), FolderError> {
        let node = self
            .nodes
            .get(name)
            .ok_or_else(|| FolderError::FolderNotFound(name.clone()))?;
        let old_path = node.folder.path.clone();
        let old_parent = node.parent.clone();

        let new_path = {
            let dst_node = self
                .nodes
                .get(dst)
                .ok_or_else(|| FolderError::FolderNotFound(dst.clone()))?;
            dst_node.folder.path.child(name)
        };

        // Detach from the old attachment point.
        match &old_parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.remove(name);
                }
            }
            None => {
                self.roots.remove(name);
            }
        }

        // Attach under the destination.
        if let Some(dst_node) = self.nodes.get_mut(dst) {
            dst_node.children.insert(name.clone());
        }
        if let Some(node) = self.nodes.get_mut(name) {
            node.parent = Some(dst.clone());
        }

        // Rewrite paths across the whole moved subtree.
        let mut stack = vec![name.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(&current) {
                node.folder.path = node
                    .folder
                    .path
                    .rebase(&old_path, &new_path)
                    .expect("subtree paths share the moved folder's old path prefix");
                stack.extend(node.children.iter().cloned());
            }
        }

        Ok(())
    }

    /// Collect the subtree rooted at `name` in depth-first pre-order,
    /// the target folder included, children visited in name order.
    ///
    /// Returns `None` if the name is absent from the organization.
    pub fn collect_subtree(&self, name: &FolderName) -> Option<Vec<Folder>> {
        let node = self.nodes.get(name)?;
        let mut out = Vec::new();
        self.collect_into(node, &mut out);
        Some(out)
    }

    /// Collect every folder in the organization: each root's subtree
    /// in root-name order, concatenated.
    pub fn collect_all(&self) -> Vec<Folder> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            if let Some(node) = self.nodes.get(root) {
                self.collect_into(node, &mut out);
            }
        }
        out
    }

    fn collect_into(&self, node: &FolderNode, out: &mut Vec<Folder>) {
        out.push(node.folder.clone());
        for child in &node.children {
            if let Some(child_node) = self.nodes.get(child) {
                self.collect_into(child_node, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path::FolderPath;

    fn org() -> OrgId {
        OrgId::parse("c1556e17-b7c0-45a3-a6ae-9546248fb17a").unwrap()
    }

    fn folder(org_id: OrgId, path: &str) -> Folder {
        let path = FolderPath::new(path).unwrap();
        let name = FolderName::new(path.leaf()).unwrap();
        Folder::new(name, org_id, path)
    }

    fn name(s: &str) -> FolderName {
        FolderName::new(s).unwrap()
    }

    fn tree(paths: &[&str]) -> OrgTree {
        let folders = paths.iter().map(|p| folder(org(), p)).collect();
        OrgTree::build(org(), folders).unwrap()
    }

    fn paths(folders: &[Folder]) -> Vec<String> {
        folders.iter().map(|f| f.path.to_string()).collect()
    }

    #[test]
    fn build_empty() {
        let t = OrgTree::build(org(), Vec::new()).unwrap();
        assert!(t.is_empty());
        assert!(t.collect_all().is_empty());
    }

    #[test]
    fn build_accepts_unsorted_input() {
        let t = tree(&[
            "alpha.foxtrot",
            "alpha",
            "alpha.bravo.charlie",
            "alpha.bravo",
        ]);
        assert_eq!(t.len(), 4);
        assert_eq!(
            paths(&t.collect_all()),
            vec!["alpha", "alpha.bravo", "alpha.bravo.charlie", "alpha.foxtrot"]
        );
    }

    #[test]
    fn build_multiple_roots() {
        let t = tree(&["bravo", "alpha", "bravo.delta"]);
        assert_eq!(
            paths(&t.collect_all()),
            vec!["alpha", "bravo", "bravo.delta"]
        );
    }

    #[test]
    fn build_rejects_missing_intermediate() {
        let folders = vec![folder(org(), "alpha"), folder(org(), "alpha.bravo.charlie")];
        let err = OrgTree::build(org(), folders).unwrap_err();
        assert!(matches!(err, FolderError::MalformedPath { .. }));
    }

    #[test]
    fn build_rejects_missing_root() {
        let folders = vec![folder(org(), "alpha.bravo")];
        let err = OrgTree::build(org(), folders).unwrap_err();
        assert!(matches!(err, FolderError::MalformedPath { .. }));
    }

    #[test]
    fn build_rejects_duplicate_name() {
        let folders = vec![
            folder(org(), "alpha"),
            folder(org(), "bravo"),
            folder(org(), "bravo.alpha"),
        ];
        let err = OrgTree::build(org(), folders).unwrap_err();
        assert!(matches!(err, FolderError::DuplicateFolder { .. }));
    }

    #[test]
    fn build_rejects_name_path_mismatch() {
        let f = Folder::new(
            name("zulu"),
            org(),
            FolderPath::new("alpha").unwrap(),
        );
        let err = OrgTree::build(org(), vec![f]).unwrap_err();
        assert!(matches!(err, FolderError::MalformedPath { .. }));
    }

    #[test]
    fn parent_back_references() {
        let t = tree(&["alpha", "alpha.bravo"]);
        assert_eq!(t.get(&name("alpha")).unwrap().parent(), None);
        assert_eq!(
            t.get(&name("bravo")).unwrap().parent(),
            Some(&name("alpha"))
        );
    }

    #[test]
    fn collect_subtree_includes_target() {
        let t = tree(&["alpha", "alpha.bravo", "alpha.bravo.charlie", "alpha.delta"]);
        let sub = t.collect_subtree(&name("bravo")).unwrap();
        assert_eq!(paths(&sub), vec!["alpha.bravo", "alpha.bravo.charlie"]);
    }

    #[test]
    fn collect_subtree_missing_name() {
        let t = tree(&["alpha"]);
        assert!(t.collect_subtree(&name("zulu")).is_none());
    }

    #[test]
    fn reparent_rewrites_subtree_paths() {
        let mut t = tree(&["alpha", "bravo", "alpha.charlie", "alpha.charlie.delta"]);
        t.reparent(&name("charlie"), &name("bravo")).unwrap();

        assert_eq!(
            paths(&t.collect_all()),
            vec!["alpha", "bravo", "bravo.charlie", "bravo.charlie.delta"]
        );
        assert_eq!(
            t.get(&name("charlie")).unwrap().parent(),
            Some(&name("bravo"))
        );
    }

    #[test]
    fn reparent_root_leaves_root_set() {
        let mut t = tree(&["alpha", "bravo"]);
        t.reparent(&name("alpha"), &name("bravo")).unwrap();
        assert_eq!(paths(&t.collect_all()), vec!["bravo", "bravo.alpha"]);
    }

    #[test]
    fn reparent_missing_names() {
        let mut t = tree(&["alpha"]);
        assert!(matches!(
            t.reparent(&name("zulu"), &name("alpha")),
            Err(FolderError::FolderNotFound(_))
        ));
        assert!(matches!(
            t.reparent(&name("alpha"), &name("zulu")),
            Err(FolderError::FolderNotFound(_))
        ));
    }
}
