//! Git blob object
//!
//! Blobs store file content verbatim, without any metadata like filename or
//! permissions (those live in trees). Content is kept as raw bytes; nothing
//! here assumes UTF-8.

use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::raw_object;
use bytes::Bytes;
use derive_new::new;

/// File content addressed by the SHA-1 of its framed form.
#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(raw_object::frame(&self.object_type(), &self.content))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
