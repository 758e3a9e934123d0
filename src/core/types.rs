//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`FolderName`] - Validated folder name (one path segment)
//! - [`OrgId`] - Organization identifier (UUID)
//! - [`Folder`] - A named folder record with its full dotted path
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use grove::core::types::{FolderName, OrgId};
//!
//! // Valid constructions
//! let name = FolderName::new("noble-vixen").unwrap();
//! let org = OrgId::parse("c1556e17-b7c0-45a3-a6ae-9546248fb17a").unwrap();
//!
//! // Invalid constructions fail at creation time
//! assert!(FolderName::new("has.dot").is_err());
//! assert!(OrgId::parse("not-a-uuid").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::path::FolderPath;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid folder name: {0}")]
    InvalidFolderName(String),

    #[error("invalid organization id: {0}")]
    InvalidOrgId(String),

    #[error("invalid folder path: {0}")]
    InvalidFolderPath(String),
}

/// A validated folder name.
///
/// A folder name is a single path segment:
/// - Cannot be empty
/// - Only ASCII alphanumerics, `-` and `_`
/// - Cannot begin or end with `-`
///
/// The `.` character is excluded because it separates segments in a
/// [`FolderPath`].
///
/// # Example
///
/// ```
/// use grove::core::types::FolderName;
///
/// let name = FolderName::new("driven-stripperella").unwrap();
/// assert_eq!(name.as_str(), "driven-stripperella");
///
/// assert!(FolderName::new("").is_err());
/// assert!(FolderName::new("a.b").is_err());
/// assert!(FolderName::new("has space").is_err());
/// assert!(FolderName::new("-leading").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FolderName(String);

impl FolderName {
    /// Create a new validated folder name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFolderName` if the name violates the
    /// segment rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a name against the segment rules.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidFolderName(
                "folder name cannot be empty".into(),
            ));
        }

        if name.starts_with('-') || name.ends_with('-') {
            return Err(TypeError::InvalidFolderName(
                "folder name cannot begin or end with '-'".into(),
            ));
        }

        for c in name.chars() {
            if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Err(TypeError::InvalidFolderName(format!(
                    "folder name cannot contain '{c}'"
                )));
            }
        }

        Ok(())
    }

    /// Get the folder name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FolderName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FolderName> for String {
    fn from(name: FolderName) -> Self {
        name.0
    }
}

impl AsRef<str> for FolderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for FolderName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for FolderName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for FolderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An organization identifier.
///
/// Organizations are tenants; folders are fully partitioned by
/// organization with no cross-organization relationships.
///
/// # Example
///
/// ```
/// use grove::core::types::OrgId;
///
/// let org = OrgId::parse("38b9879b-f73b-4b0e-b9d9-4fc4c23643a7").unwrap();
/// assert_eq!(org.to_string(), "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(Uuid);

impl OrgId {
    /// Parse an organization id from its canonical hyphenated form.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidOrgId` if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| TypeError::InvalidOrgId(e.to_string()))
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random organization id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::str::FromStr for OrgId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A folder record.
///
/// Identity (name, organization) never changes; `path` is rewritten
/// when the folder or one of its ancestors is moved. The last path
/// segment always equals `name` — the registry enforces this at build
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// The folder's own name.
    pub name: FolderName,
    /// The owning organization.
    pub org_id: OrgId,
    /// Dot-separated ancestor-name chain from a root folder down to
    /// and including this folder.
    pub path: FolderPath,
}

impl Folder {
    /// Create a folder record.
    pub fn new(name: FolderName, org_id: OrgId, path: FolderPath) -> Self {
        Self { name, org_id, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_name_accepts_segment_characters() {
        for name in ["alpha", "noble-vixen", "a1", "under_score", "A"] {
            assert!(FolderName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn folder_name_rejects_invalid() {
        for name in ["", "a.b", "has space", "-leading", "trailing-", "tab\there"] {
            assert!(FolderName::new(name).is_err(), "{name} should be invalid");
        }
    }

    #[test]
    fn folder_name_serde_roundtrip() {
        let name = FolderName::new("noble-vixen").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"noble-vixen\"");
        let parsed: FolderName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn folder_name_serde_rejects_invalid() {
        let result: Result<FolderName, _> = serde_json::from_str("\"bad.name\"");
        assert!(result.is_err());
    }

    #[test]
    fn org_id_parse_and_display() {
        let raw = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";
        let org = OrgId::parse(raw).unwrap();
        assert_eq!(org.to_string(), raw);
    }

    #[test]
    fn org_id_rejects_garbage() {
        assert!(OrgId::parse("not-a-uuid").is_err());
    }
}
