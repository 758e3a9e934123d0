//! core::error
//!
//! Error taxonomy for registry construction, queries, and moves.
//!
//! Every error is terminal to the single requested operation: nothing
//! is retried internally, and no failed operation mutates tree state.
//! Construction-time errors ([`FolderError::MalformedPath`],
//! [`FolderError::DuplicateFolder`]) abort building the whole registry,
//! since a partially built tree has undefined ancestry.

use thiserror::Error;

use super::path::FolderPath;
use super::types::{FolderName, OrgId};

/// Errors from registry construction, queries, and moves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FolderError {
    #[error("no organization found with id {0}")]
    OrganizationNotFound(OrgId),

    #[error("folder '{0}' does not exist")]
    FolderNotFound(FolderName),

    #[error("folder '{0}' does not exist in the specified organization")]
    FolderWrongOrganization(FolderName),

    #[error("malformed path '{path}': {reason}")]
    MalformedPath { path: FolderPath, reason: String },

    #[error("duplicate folder '{name}' in organization {org_id}")]
    DuplicateFolder { name: FolderName, org_id: OrgId },

    #[error("cannot move a folder to itself")]
    MoveToSelf,

    #[error("source folder '{0}' does not exist")]
    SourceNotFound(FolderName),

    #[error("destination folder '{0}' does not exist")]
    DestinationNotFound(FolderName),

    #[error("cannot move a folder to a different organization")]
    CrossOrganizationMove,

    #[error("cannot move folder '{name}' into its own subtree")]
    MoveIntoOwnSubtree { name: FolderName },
}
