//! Git command implementations
//!
//! Command implementations, organized following Git's architecture:
//!
//! - `plumbing`: Low-level object manipulation (hash-object, cat-file,
//!   ls-tree, write-tree, commit-tree)
//! - `porcelain`: User-facing commands (init)
//!
//! Plumbing commands are the building blocks; each is an `impl Repository`
//! method writing its output to the repository's sink.

pub mod plumbing;
pub mod porcelain;
