use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{EntryMode, Tree};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Snapshot the workspace into the object database and print the root
    /// tree's id.
    pub fn write_tree(&mut self) -> anyhow::Result<()> {
        let tree_id = self.build_tree(Path::new(""))?;

        write!(self.writer(), "{tree_id}")?;

        Ok(())
    }

    /// Recursively store a directory: one blob per file, one tree per
    /// subdirectory, bottom-up so child ids exist before their parent tree
    /// is serialized.
    ///
    /// An unreadable entry aborts the whole build; blobs already stored stay
    /// behind as harmless content-addressed litter.
    fn build_tree(&self, dir_path: &Path) -> anyhow::Result<ObjectId> {
        let mut tree = Tree::default();

        for entry in self.workspace().list_dir(dir_path)? {
            if entry.is_dir {
                let child_id = self.build_tree(&entry.path)?;
                tree.add_entry(entry.name, EntryMode::Directory, child_id);
            } else {
                let blob = Blob::new(self.workspace().read_file(&entry.path)?);
                let child_id = self.database().store(&blob)?;
                tree.add_entry(entry.name, EntryMode::Regular, child_id);
            }
        }

        // an empty directory still produces a (valid, empty) tree object
        self.database().store(&tree)
    }
}
