use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::EntryMode;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// List a tree's entries in stored (name-sorted) order.
    ///
    /// With `recursive`, subtrees are expanded in place and entries are
    /// printed with their full path relative to the listed tree.
    pub fn ls_tree(&mut self, object: &str, name_only: bool, recursive: bool) -> anyhow::Result<()> {
        let object_id = self.database().resolve(object)?;

        self.print_tree(&object_id, Path::new(""), name_only, recursive)
    }

    fn print_tree(
        &self,
        object_id: &ObjectId,
        prefix: &Path,
        name_only: bool,
        recursive: bool,
    ) -> anyhow::Result<()> {
        let tree = self.database().parse_object_as_tree(object_id)?;

        for (name, entry) in tree.entries() {
            let path = prefix.join(name);

            if recursive && entry.mode() == EntryMode::Directory {
                self.print_tree(entry.oid(), &path, name_only, recursive)?;
            } else if name_only {
                writeln!(self.writer(), "{}", path.display())?;
            } else {
                writeln!(
                    self.writer(),
                    "{} {} {}\t{}",
                    entry.mode().as_str(),
                    entry.mode().object_type(),
                    entry.oid(),
                    path.display()
                )?;
            }
        }

        Ok(())
    }
}
