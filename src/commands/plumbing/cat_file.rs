use crate::areas::repository::Repository;
use std::io::Write;

/// What `cat-file` should print for the selected object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// `-p`: the payload bytes, verbatim (trees are not pretty-printed here;
    /// that's `ls-tree`'s job)
    Payload,
    /// `-t`: the object kind
    Kind,
    /// `-s`: the payload size in bytes
    Size,
}

impl Repository {
    pub fn cat_file(&mut self, mode: CatFileMode, object: &str) -> anyhow::Result<()> {
        let object_id = self.database().resolve(object)?;
        let raw = self.database().load_raw(&object_id)?;

        match mode {
            CatFileMode::Payload => self.writer().write_all(raw.payload())?,
            CatFileMode::Kind => write!(self.writer(), "{}", raw.kind())?,
            CatFileMode::Size => write!(self.writer(), "{}", raw.size())?,
        }

        Ok(())
    }
}
