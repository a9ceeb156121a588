//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes
//! of an object's framed bytes. Objects are stored at
//! `.git/objects/<first-2-chars>/<remaining-38-chars>`.

use crate::artifacts::errors::Error;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::io;
use std::path::PathBuf;

/// A validated 40-character hexadecimal object ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string.
    ///
    /// Rejects anything that is not exactly 40 lowercase-insensitive hex
    /// characters.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(Error::invalid_argument(format!(
                "object ID {id:?} has length {}, expected {OBJECT_ID_LENGTH}",
                id.len()
            ))
            .into());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(
                Error::invalid_argument(format!("object ID {id:?} is not hexadecimal")).into(),
            );
        }
        Ok(Self(id))
    }

    /// Build an object ID from a raw 20-byte SHA-1 digest.
    pub fn from_digest(digest: &[u8]) -> anyhow::Result<Self> {
        if digest.len() != OBJECT_ID_LENGTH / 2 {
            return Err(Error::corrupt_object(format!(
                "object ID digest has {} bytes, expected {}",
                digest.len(),
                OBJECT_ID_LENGTH / 2
            ))
            .into());
        }

        let mut hex = String::with_capacity(OBJECT_ID_LENGTH);
        for byte in digest {
            hex.push_str(&format!("{byte:02x}"));
        }
        Ok(Self(hex))
    }

    /// Write the object ID in binary format (20 bytes).
    ///
    /// Used when serializing tree entries, which carry child hashes raw.
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        for i in (0..OBJECT_ID_LENGTH).step_by(2) {
            let byte = u8::from_str_radix(&self.0[i..i + 2], 16)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid hex digit"))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    /// Read an object ID from binary format (20 bytes).
    pub fn read_h40_from<R: io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<Self> {
        let mut digest = [0u8; OBJECT_ID_LENGTH / 2];
        reader.read_exact(&mut digest)?;

        Self::from_digest(&digest)
    }

    /// Convert to the file system path of the object, `XX/YYYY...` where XX
    /// is the first two hex characters.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
