//! Git object types and operations
//!
//! Git stores all content as objects identified by SHA-1 hashes. Three kinds
//! exist here:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//! - **Commit**: Snapshot with metadata (author, message, parents, tree)
//!
//! All objects share the on-disk framing `<kind> <size>\0<payload>`, handled
//! by the `raw_object` codec.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod raw_object;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
