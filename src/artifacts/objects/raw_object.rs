//! The object codec
//!
//! Every object is stored (and hashed) in its framed form
//! `<kind> <decimal-size>\0<payload>`. This module builds that framing and
//! parses it back into a [`RawObject`] record.
//!
//! Parsing is strictly delimiter-driven: scan to the first NUL, split the
//! prefix on the first space. Kind and size fields have no fixed width, so
//! offset-based slicing would misparse `commit` headers and sizes of three
//! or more digits.

use crate::artifacts::errors::Error;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;

/// Build the framed byte sequence for a payload of the given kind.
///
/// The result is both what gets zlib-compressed on disk and what gets
/// SHA-1 hashed for the object's identity.
pub fn frame(kind: &ObjectType, payload: &[u8]) -> Bytes {
    let mut framed = Vec::with_capacity(kind.as_str().len() + 16 + payload.len());
    framed.extend_from_slice(kind.as_str().as_bytes());
    framed.push(b' ');
    framed.extend_from_slice(payload.len().to_string().as_bytes());
    framed.push(0);
    framed.extend_from_slice(payload);

    Bytes::from(framed)
}

/// An object decoded from its framed form, parsed exactly once.
///
/// Consumers read the fields directly instead of re-scanning the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    kind: ObjectType,
    size: usize,
    payload: Bytes,
}

impl RawObject {
    /// Decode framed bytes into kind, size, and payload.
    ///
    /// Fails with `CorruptObject` when the NUL delimiter is missing, the
    /// kind is unknown, the size field is not a decimal number, or the size
    /// disagrees with the actual payload length.
    pub fn decode(framed: Bytes) -> anyhow::Result<Self> {
        let nul = framed
            .iter()
            .position(|&byte| byte == 0)
            .ok_or_else(|| Error::corrupt_object("missing NUL delimiter in object header"))?;

        let header = std::str::from_utf8(&framed[..nul])
            .map_err(|_| Error::corrupt_object("object header is not valid UTF-8"))?;
        let (kind, size) = header
            .split_once(' ')
            .ok_or_else(|| Error::corrupt_object("missing space delimiter in object header"))?;

        let kind = ObjectType::try_from(kind)?;
        let size = size
            .parse::<usize>()
            .map_err(|_| Error::corrupt_object(format!("invalid size field {size:?}")))?;

        let payload = framed.slice(nul + 1..);
        if payload.len() != size {
            return Err(Error::corrupt_object(format!(
                "size field says {size} bytes, payload has {}",
                payload.len()
            ))
            .into());
        }

        Ok(RawObject {
            kind,
            size,
            payload,
        })
    }

    pub fn kind(&self) -> &ObjectType {
        &self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::errors::Error;
    use proptest::prelude::*;

    fn assert_corrupt(err: anyhow::Error) {
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::CorruptObject { .. })
        ));
    }

    #[test]
    fn frames_with_decimal_size_header() {
        let framed = frame(&ObjectType::Blob, b"hello\n");
        assert_eq!(framed.as_ref(), b"blob 6\0hello\n");
    }

    #[test]
    fn decodes_commit_kind_and_wide_sizes() {
        // A six-letter kind and a three-digit size would both break
        // fixed-offset slicing.
        let payload = vec![b'x'; 142];
        let framed = frame(&ObjectType::Commit, &payload);

        let raw = RawObject::decode(framed).unwrap();
        assert_eq!(raw.kind(), &ObjectType::Commit);
        assert_eq!(raw.size(), 142);
        assert_eq!(raw.payload().as_ref(), &payload[..]);
    }

    #[test]
    fn decodes_empty_payload() {
        let raw = RawObject::decode(Bytes::from_static(b"tree 0\0")).unwrap();
        assert_eq!(raw.kind(), &ObjectType::Tree);
        assert_eq!(raw.size(), 0);
        assert!(raw.payload().is_empty());
    }

    #[test]
    fn rejects_missing_nul() {
        assert_corrupt(RawObject::decode(Bytes::from_static(b"blob 6hello")).unwrap_err());
    }

    #[test]
    fn rejects_missing_space() {
        assert_corrupt(RawObject::decode(Bytes::from_static(b"blob6\0hello!")).unwrap_err());
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_corrupt(RawObject::decode(Bytes::from_static(b"tag 2\0hi")).unwrap_err());
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert_corrupt(RawObject::decode(Bytes::from_static(b"blob six\0hello\n")).unwrap_err());
        assert_corrupt(RawObject::decode(Bytes::from_static(b"blob -6\0hello\n")).unwrap_err());
    }

    #[test]
    fn rejects_size_payload_mismatch() {
        assert_corrupt(RawObject::decode(Bytes::from_static(b"blob 99\0hello\n")).unwrap_err());
    }

    proptest! {
        #[test]
        fn decode_inverts_frame(
            payload in proptest::collection::vec(any::<u8>(), 0..1024),
            kind_index in 0usize..3,
        ) {
            let kinds = [ObjectType::Blob, ObjectType::Tree, ObjectType::Commit];
            let kind = kinds[kind_index].clone();

            let raw = RawObject::decode(frame(&kind, &payload)).unwrap();
            prop_assert_eq!(raw.kind(), &kind);
            prop_assert_eq!(raw.size(), payload.len());
            prop_assert_eq!(raw.payload().as_ref(), &payload[..]);
        }
    }
}
