//! core
//!
//! Core domain types and the per-organization folder tree.
//!
//! # Modules
//!
//! - [`types`] - Strong types: FolderName, OrgId, Folder
//! - [`path`] - Dotted folder paths and prefix rewriting
//! - [`tree`] - Per-organization tree with name lookup and traversal
//! - [`error`] - Error taxonomy for construction, queries, and moves
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - The path string and the explicit tree are kept in sync by
//!   centralizing all structural mutation in the move engine
//! - All traversal is deterministic

pub mod config;
pub mod error;
pub mod path;
pub mod tree;
pub mod types;
