use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, file: &str) -> anyhow::Result<()> {
        // read object file
        let content = self.workspace().read_file(file.as_ref())?;
        let blob = Blob::new(content);

        // write as compressed object file and print the id
        let object_id = self.database().store(&blob)?;

        write!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
