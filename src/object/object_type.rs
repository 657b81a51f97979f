use std::str::FromStr;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub const BLOB_STRING: &'static str = "blob";
    pub const TREE_STRING: &'static str = "tree";
    pub const COMMIT_STRING: &'static str = "commit";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => ObjectType::BLOB_STRING,
            Self::Tree => ObjectType::TREE_STRING,
            Self::Commit => ObjectType::COMMIT_STRING,
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&[u8]> for ObjectType {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        match value {
            b"blob" => Ok(ObjectType::Blob),
            b"tree" => Ok(ObjectType::Tree),
            b"commit" => Ok(ObjectType::Commit),
            _ => Err(Error::corrupt(format!(
                "object did not have a valid type, got: {:?}",
                String::from_utf8_lossy(value)
            ))),
        }
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ObjectType::try_from(s.as_bytes())
    }
}
