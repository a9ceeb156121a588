use crate::artifacts::errors::Error;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// A directory entry as seen by the tree builder: name, path relative to the
/// workspace root, and whether it is a directory.
#[derive(Debug, Clone)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// The working directory: all file system reads the commands perform go
/// through here, rooted at the repository path.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a file's raw bytes. `file_path` is relative to the workspace root.
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {}", full_path.display()))?;

        Ok(content.into())
    }

    /// List the immediate entries of a directory, sorted ascending by name,
    /// with the repository metadata directory excluded.
    ///
    /// `dir_path` is relative to the workspace root; pass an empty path for
    /// the root itself. Any unreadable entry is an error, never skipped.
    pub fn list_dir(&self, dir_path: &Path) -> anyhow::Result<Vec<WorkspaceEntry>> {
        let full_path = self.path.join(dir_path);

        let mut entries = Vec::new();
        let dir_reader = std::fs::read_dir(&full_path)
            .with_context(|| format!("Unable to read directory {}", full_path.display()))?;

        for entry in dir_reader {
            let entry = entry
                .with_context(|| format!("Unable to read directory {}", full_path.display()))?;

            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| {
                    Error::invalid_argument(format!("file name {name:?} is not valid UTF-8"))
                })?;
            if IGNORED_PATHS.contains(&name.as_str()) {
                continue;
            }

            let file_type = entry
                .file_type()
                .with_context(|| format!("Unable to stat {}", entry.path().display()))?;

            entries.push(WorkspaceEntry {
                path: dir_path.join(&name),
                is_dir: file_type.is_dir(),
                name,
            });
        }

        // the tree format requires byte-wise name order, independent of how
        // the file system happens to list entries
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }
}
