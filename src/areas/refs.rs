//! Reference layout
//!
//! Only the static initial layout is managed here: the `refs/` directory and
//! a `HEAD` file pointing at the default branch. No reference is ever
//! updated or resolved — `commit-tree` returns a hash without moving any
//! branch pointer.

use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    /// Write the symbolic HEAD pointer for a fresh repository.
    pub fn write_initial_head(&self, branch: &str) -> anyhow::Result<()> {
        std::fs::write(self.head_path(), format!("ref: refs/heads/{branch}\n"))
            .context("Failed to create initial HEAD reference")
    }
}
