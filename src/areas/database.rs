use crate::artifacts::errors::Error;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::raw_object::RawObject;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::PathBuf;

/// Shortest accepted abbreviated object id.
const MIN_PREFIX_LENGTH: usize = 4;

/// The object database: content-addressed, zlib-compressed objects under
/// `objects/<first-2-hex>/<remaining-38-hex>`.
///
/// Objects are write-once and never mutated or deleted; identical content
/// always lands on the identical path, so repeated stores are naturally
/// idempotent.
// TODO: implement packfiles for better storage efficiency
#[derive(Debug)]
pub struct Database {
    path: Box<std::path::Path>,
}

impl Database {
    pub fn new(path: Box<std::path::Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &std::path::Path {
        &self.path
    }

    /// Store an object and return its id.
    ///
    /// The write is skipped when the object file already exists; content
    /// addressing makes that purely an efficiency matter, never a
    /// correctness one.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object.serialize()?)?;
        }

        Ok(object_id)
    }

    /// Load an object's framed bytes (header included).
    ///
    /// Fails with `ObjectNotFound` when no file exists for the id and with
    /// `CorruptObject` when the file cannot be inflated.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(Error::object_not_found(object_id.as_ref()).into());
        }

        let compressed = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(compressed.into())
            .map_err(|_| Error::corrupt_object(format!("unable to inflate object {object_id}")).into())
    }

    /// Load and decode an object into its parsed record.
    pub fn load_raw(&self, object_id: &ObjectId) -> anyhow::Result<RawObject> {
        RawObject::decode(self.load(object_id)?)
    }

    /// Load an object and deserialize it as a tree.
    ///
    /// Any other kind is an `InvalidArgument` error.
    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Tree> {
        let raw = self.load_raw(object_id)?;

        match raw.kind() {
            ObjectType::Tree => Tree::deserialize(Cursor::new(raw.payload().clone())),
            kind => Err(Error::invalid_argument(format!(
                "object {object_id} is a {kind}, not a tree"
            ))
            .into()),
        }
    }

    /// Resolve a full or abbreviated object id.
    ///
    /// Abbreviations need at least 4 hex characters and must match exactly
    /// one stored object.
    pub fn resolve(&self, object: &str) -> anyhow::Result<ObjectId> {
        if object.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(object.to_string());
        }

        if object.len() < MIN_PREFIX_LENGTH || !object.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_argument(format!(
                "{object:?} is not a valid object id or abbreviation"
            ))
            .into());
        }

        let mut matches = self.find_objects_by_prefix(object)?;
        match matches.len() {
            0 => Err(Error::object_not_found(object).into()),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::invalid_argument(format!(
                "object id prefix {object:?} is ambiguous ({} candidates)",
                matches.len()
            ))
            .into()),
        }
    }

    /// Find all objects whose id starts with the given prefix by scanning
    /// the prefix's fan-out directory.
    fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        let dir_name = &prefix[..2];
        let file_prefix = &prefix[2..];
        let dir_path = self.path.join(dir_name);

        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let file_name = entry.file_name();
                let file_name = file_name.to_string_lossy();

                if file_name.starts_with(file_prefix) {
                    if let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}")) {
                        matches.push(oid);
                    }
                }
            }
        }

        Ok(matches)
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file onto the final path so a half-written object
        // is never visible under its hash-derived name
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
