//! Core repository components
//!
//! The fundamental building blocks of a repository:
//!
//! - `database`: Object database storing blobs, trees, and commits
//! - `refs`: Reference layout (HEAD, refs directory)
//! - `repository`: High-level repository coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
