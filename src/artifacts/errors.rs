//! Typed error kinds for the object store.
//!
//! Everything still travels through `anyhow::Result`, but failures that a
//! caller may need to tell apart (a corrupt object vs. a missing one vs. a
//! bad argument) are raised as this enum so they can be downcast.

use thiserror::Error;

/// Errors with a meaningful kind, as opposed to plain I/O failures which
/// propagate as contexted `std::io::Error`s.
#[derive(Error, Debug)]
pub enum Error {
    /// Object file exists but cannot be decoded (inflation failure, missing
    /// NUL delimiter, unknown kind, bad length field).
    #[error("corrupt object: {reason}")]
    CorruptObject { reason: String },

    /// The referenced hash has no corresponding object file.
    #[error("object not found: {oid}")]
    ObjectNotFound { oid: String },

    /// Malformed hash string, ambiguous abbreviation, or wrong object kind
    /// for the requested operation.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl Error {
    pub fn corrupt_object(reason: impl Into<String>) -> Self {
        Error::CorruptObject {
            reason: reason.into(),
        }
    }

    pub fn object_not_found(oid: impl Into<String>) -> Self {
        Error::ObjectNotFound { oid: oid.into() }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }
}
