//! Git tree object
//!
//! Trees represent directory snapshots. They contain one entry per file
//! (blob) or subdirectory (tree), carrying the entry's mode, name, and the
//! child's object ID.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`, each entry `<mode> <name>\0<20-byte-sha1>`.
//!
//! Entries are serialized in ascending byte-wise name order, with no
//! mode-based tie-break. The ordering determines the tree's own hash, so two
//! implementations must agree on it exactly for round trips to produce the
//! same object ID.

use crate::artifacts::errors::Error;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::raw_object;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Entry mode tag as stored in the tree payload.
///
/// Only the two modes this store produces: regular files and directories.
/// Executables and symlinks are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Regular,
    Directory,
}

impl EntryMode {
    pub fn as_str(&self) -> &str {
        match self {
            EntryMode::Regular => "100644",
            EntryMode::Directory => "40000",
        }
    }

    /// The kind of object an entry with this mode points at.
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::Regular => ObjectType::Blob,
            EntryMode::Directory => ObjectType::Tree,
        }
    }

    pub fn from_mode_str(mode: &str) -> anyhow::Result<Self> {
        match mode {
            "100644" => Ok(EntryMode::Regular),
            "40000" => Ok(EntryMode::Directory),
            _ => Err(Error::corrupt_object(format!("unknown tree entry mode {mode:?}")).into()),
        }
    }
}

/// A single (mode, child hash) pair; the entry name is the tree's map key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: EntryMode,
    oid: ObjectId,
}

impl TreeEntry {
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }
}

/// A directory snapshot: entries keyed by name.
///
/// The BTreeMap key order is byte-wise ascending `String` order, which is
/// exactly the serialization order the format requires, regardless of the
/// order entries were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    pub fn add_entry(&mut self, name: String, mode: EntryMode, oid: ObjectId) {
        self.entries.insert(name, TreeEntry { mode, oid });
    }

    /// Entries in stored (name-sorted) order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &TreeEntry)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut payload = Vec::new();

        for (name, entry) in &self.entries {
            write!(payload, "{} {}", entry.mode.as_str(), name)?;
            payload.push(0);
            entry.oid.write_h40_to(&mut payload)?;
        }

        Ok(raw_object::frame(&self.object_type(), &payload))
    }
}

impl Unpackable for Tree {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();

        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.last() != Some(&b' ') {
                return Err(Error::corrupt_object("unexpected EOF in tree entry mode").into());
            }
            mode_bytes.pop();

            let mode_str = std::str::from_utf8(&mode_bytes)
                .map_err(|_| Error::corrupt_object("tree entry mode is not valid UTF-8"))?;
            let mode = EntryMode::from_mode_str(mode_str)?;

            name_bytes.clear();
            let n = reader.read_until(b'\0', &mut name_bytes)?;
            if n == 0 || name_bytes.last() != Some(&b'\0') {
                return Err(Error::corrupt_object("unexpected EOF in tree entry name").into());
            }
            name_bytes.pop();
            let name = std::str::from_utf8(&name_bytes)
                .map_err(|_| Error::corrupt_object("tree entry name is not valid UTF-8"))?
                .to_owned();

            let oid = ObjectId::read_h40_from(&mut reader)
                .context("unexpected EOF in tree entry object id")?;

            entries.insert(name, TreeEntry { mode, oid });
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
