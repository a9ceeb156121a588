use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Compose a commit for an already-stored tree and print its id.
    ///
    /// Neither the tree nor the parent id is checked for existence; a
    /// dangling reference only surfaces when the commit is read back. No
    /// branch pointer is updated.
    pub fn commit_tree(
        &mut self,
        tree: &str,
        parent: Option<&str>,
        message: &str,
    ) -> anyhow::Result<()> {
        let tree_oid = ObjectId::try_parse(tree.to_string())?;
        let parents = parent
            .map(|parent| ObjectId::try_parse(parent.to_string()))
            .transpose()?
            .into_iter()
            .collect();

        let author = Author::load_from_env_or_default();
        let commit = Commit::new(parents, tree_oid, author, message.to_string());

        let commit_id = self.database().store(&commit)?;

        write!(self.writer(), "{commit_id}")?;

        Ok(())
    }
}
