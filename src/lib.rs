//! Grove - An in-memory folder hierarchy engine with a command shell
//!
//! Grove maintains a per-organization namespace of named folders, each
//! identified by a dotted path (`alpha.bravo.charlie`), and supports
//! querying subtrees and relocating a folder with its entire subtree
//! to a new parent — the in-memory analogue of a virtual filesystem's
//! directory tree, scoped to tenant organizations.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - The registry: construction, queries, and the move operation
//! - [`core`] - Domain types, paths, the per-organization tree, config
//! - [`sample`] - Deterministic sample-data generation and JSON loading
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Grove maintains the following invariants:
//!
//! 1. Every folder's path records its exact ancestor name-chain
//! 2. Folder names are unique within an organization
//! 3. All structural mutation flows through the move engine, which
//!    keeps paths and the explicit tree in sync
//! 4. Failed operations leave every tree unchanged

pub mod cli;
pub mod core;
pub mod engine;
pub mod sample;
pub mod ui;
