//! core::path
//!
//! Dotted folder paths.
//!
//! A [`FolderPath`] is the dot-separated ancestor-name chain from a
//! root folder down to a given folder, inclusive: `alpha.bravo.charlie`
//! names the folder `charlie` whose parent is `bravo` whose parent is
//! the root `alpha`. The path is the source of truth for ancestry;
//! every structural mutation flows through the move engine, which keeps
//! paths and the explicit tree in sync.

use serde::{Deserialize, Serialize};

use super::types::{FolderName, TypeError};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A validated dotted folder path.
///
/// Every `.`-separated segment must be a valid [`FolderName`].
/// Paths order lexicographically, which places a parent before all of
/// its descendants among folders of the same organization.
///
/// # Example
///
/// ```
/// use grove::core::path::FolderPath;
///
/// let path = FolderPath::new("alpha.bravo.charlie").unwrap();
/// assert_eq!(path.leaf(), "charlie");
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.parent().unwrap().as_str(), "alpha.bravo");
///
/// assert!(FolderPath::new("").is_err());
/// assert!(FolderPath::new("alpha..bravo").is_err());
/// assert!(FolderPath::new(".alpha").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FolderPath(String);

impl FolderPath {
    /// Create a new validated path.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFolderPath` if the path is empty or
    /// any segment is not a valid folder name.
    pub fn new(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        if path.is_empty() {
            return Err(TypeError::InvalidFolderPath(
                "folder path cannot be empty".into(),
            ));
        }
        for segment in path.split(SEPARATOR) {
            FolderName::new(segment).map_err(|_| {
                TypeError::InvalidFolderPath(format!(
                    "path '{path}' has invalid segment '{segment}'"
                ))
            })?;
        }
        Ok(Self(path))
    }

    /// The single-segment path of a root folder.
    pub fn root(name: &FolderName) -> Self {
        Self(name.as_str().to_string())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the path's segments in root-to-leaf order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The final segment, which always equals the folder's own name.
    pub fn leaf(&self) -> &str {
        match self.0.rsplit_once(SEPARATOR) {
            Some((_, leaf)) => leaf,
            None => &self.0,
        }
    }

    /// True if the path has exactly one segment (a root folder).
    pub fn is_root(&self) -> bool {
        !self.0.contains(SEPARATOR)
    }

    /// The path minus its final segment, or `None` for a root.
    pub fn parent(&self) -> Option<FolderPath> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(prefix, _)| Self(prefix.to_string()))
    }

    /// The path extended by one child segment.
    pub fn child(&self, name: &FolderName) -> FolderPath {
        Self(format!("{}{SEPARATOR}{}", self.0, name))
    }

    /// True if `name` appears among the path's segments.
    ///
    /// Because a path records the full ancestor chain and names are
    /// unique within an organization, this is exactly the test for
    /// "this path lies in the subtree rooted at `name`".
    pub fn contains_segment(&self, name: &FolderName) -> bool {
        self.segments().any(|s| s == name.as_str())
    }

    /// True if `prefix` is a segment-wise prefix of this path.
    pub fn starts_with(&self, prefix: &FolderPath) -> bool {
        match self.0.strip_prefix(&prefix.0) {
            Some("") => true,
            Some(rest) => rest.starts_with(SEPARATOR),
            None => false,
        }
    }

    /// Replace the leading `old_prefix` with `new_prefix`.
    ///
    /// Returns `None` if this path does not lie under `old_prefix`.
    /// Used by the move engine to rewrite every path in a relocated
    /// subtree.
    pub fn rebase(&self, old_prefix: &FolderPath, new_prefix: &FolderPath) -> Option<FolderPath> {
        if !self.starts_with(old_prefix) {
            return None;
        }
        let rest = &self.0[old_prefix.0.len()..];
        Some(Self(format!("{}{rest}", new_prefix.0)))
    }
}

impl TryFrom<String> for FolderPath {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FolderPath> for String {
    fn from(path: FolderPath) -> Self {
        path.0
    }
}

impl AsRef<str> for FolderPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for FolderPath {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for FolderPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
