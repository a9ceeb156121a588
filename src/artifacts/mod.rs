//! Git data structures
//!
//! This module contains the core Git types:
//!
//! - `errors`: Typed error kinds surfaced by the object store
//! - `objects`: Git object types (blob, tree, commit) and the object codec

pub mod errors;
pub mod objects;
