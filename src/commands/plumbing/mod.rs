//! Plumbing commands (low-level Git operations)
//!
//! Direct access to the object database, primarily for scripting and as
//! building blocks for porcelain commands.
//!
//! ## Commands
//!
//! - `hash-object`: Store a file as a blob and print its id
//! - `cat-file`: Print a stored object's payload, kind, or size
//! - `ls-tree`: List the entries of a tree object
//! - `write-tree`: Snapshot the working directory into a tree graph
//! - `commit-tree`: Compose and store a commit object

pub mod cat_file;
pub mod commit_tree;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
