use std::io::{Cursor, Write};

use byteorder::WriteBytesExt;

use crate::byteable::Byteable;
use crate::hashing::Hash;
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

use super::{NULL_BYTE, ObjectType, SPACE_BYTE};

/// An object as it lives in the database: its kind plus the raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub kind: ObjectType,
    pub data: Vec<u8>,
}

/// Encodes `data` with the object header, following the next format:
///
/// `{type} {data_length}\0{data}`
///
/// # Errors
///
/// This function will fail if any write operation to a `std::io::Cursor` returns an error.
pub fn frame(kind: ObjectType, data: &[u8]) -> Result<Vec<u8>> {
    // Encoding to this format: blob 4\0abcd
    let mut cursor = Cursor::new(Vec::with_capacity(data.len() + 16));

    cursor.write_all(kind.as_str().as_bytes())?;
    cursor.write_u8(SPACE_BYTE)?;
    cursor.write_all(data.len().to_string().as_bytes())?;
    cursor.write_u8(NULL_BYTE)?;
    cursor.write_all(data)?;

    Ok(cursor.into_inner())
}

/// Returns the identity an object of `kind` holding `data` would have, without storing it.
pub fn hash(kind: ObjectType, data: &[u8]) -> Result<Hash> {
    Ok(Hash::compute(&frame(kind, data)?))
}

impl Object {
    pub fn new<T: Into<Vec<u8>>>(kind: ObjectType, data: T) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }
}

impl Byteable for Object {
    fn as_bytes(&self) -> Result<Vec<u8>> {
        frame(self.kind, &self.data)
    }

    /// Reads a framed object.
    ///
    /// The kind ends at the first space and the length at the first null byte after it. The
    /// payload is everything that follows, which may contain null bytes itself, and must be
    /// exactly as long as the header declares.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);

        let kind_buf = cursor
            .read_until_checked(SPACE_BYTE)
            .map_err(|_| Error::corrupt("expected space after object type"))?;
        let kind = ObjectType::try_from(kind_buf.as_slice())?;

        let len_buf = cursor
            .read_until_checked(NULL_BYTE)
            .map_err(|_| Error::corrupt("expected null byte after data length"))?;
        if len_buf.is_empty() || !len_buf.iter().all(u8::is_ascii_digit) {
            return Err(Error::corrupt(format!(
                "could not read data length as a number: {:?}",
                String::from_utf8_lossy(&len_buf)
            )));
        }
        let data_len: usize = String::from_utf8_lossy(&len_buf)
            .parse()
            .map_err(|e| Error::corrupt(format!("data length out of range: {e}")))?;

        let data = &bytes[cursor.position() as usize..];
        if data.len() != data_len {
            return Err(Error::corrupt(format!(
                "length read {} did not match actual data length {}",
                data_len,
                data.len()
            )));
        }

        Ok(Object::new(kind, data))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_frame_blob() {
        let framed = frame(ObjectType::Blob, b"hi").unwrap();
        assert_eq!(b"blob 2\0hi".as_slice(), framed.as_slice());
    }

    #[test]
    fn test_frame_empty_tree() {
        let framed = frame(ObjectType::Tree, b"").unwrap();
        assert_eq!(b"tree 0\0".as_slice(), framed.as_slice());
    }

    #[test]
    fn test_empty_blob_hash() {
        let expected = Hash::from_str("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391").unwrap();
        assert_eq!(expected, hash(ObjectType::Blob, b"").unwrap());
    }

    #[test]
    fn test_blob_hash_is_hash_of_framed_bytes() {
        let expected = Hash::compute(b"blob 2\0hi");
        assert_eq!(expected, hash(ObjectType::Blob, b"hi").unwrap());
        assert_eq!(
            "32f95c0d1244a78b2be1bab8de17906fabb2c4a8",
            expected.to_string()
        );
    }

    #[test]
    fn test_kind_changes_hash() {
        assert_ne!(
            hash(ObjectType::Blob, b"").unwrap(),
            hash(ObjectType::Tree, b"").unwrap()
        );
    }

    #[test]
    fn test_from_bytes_payload_with_null_bytes() {
        let data = b"100644 a\0\0\0\0 more\0".to_vec();
        let object = Object::new(ObjectType::Tree, data.clone());
        let decoded = Object::from_bytes(&object.as_bytes().unwrap()).unwrap();
        assert_eq!(ObjectType::Tree, decoded.kind);
        assert_eq!(data, decoded.data);
    }

    #[test]
    fn test_from_bytes_unknown_type() {
        let result = Object::from_bytes(b"tag 0\0");
        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_from_bytes_missing_space() {
        let result = Object::from_bytes(b"blob");
        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_from_bytes_missing_null() {
        let result = Object::from_bytes(b"blob 2");
        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_from_bytes_invalid_length() {
        assert!(matches!(
            Object::from_bytes(b"blob abc\0"),
            Err(Error::CorruptObject(_))
        ));
        assert!(matches!(
            Object::from_bytes(b"blob +2\0hi"),
            Err(Error::CorruptObject(_))
        ));
        assert!(matches!(
            Object::from_bytes(b"blob \0"),
            Err(Error::CorruptObject(_))
        ));
    }

    #[test]
    fn test_from_bytes_length_mismatch() {
        assert!(matches!(
            Object::from_bytes(b"blob 3\0hi"),
            Err(Error::CorruptObject(_))
        ));
        assert!(matches!(
            Object::from_bytes(b"blob 1\0hi"),
            Err(Error::CorruptObject(_))
        ));
    }
}
