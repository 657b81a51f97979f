use std::fmt::{Debug, Display};
use std::str::FromStr;

use sha1::{Digest, Sha1};

use crate::{Error, Result};

pub const HASH_BYTE_LEN: usize = 20;

/// Identity of an object: the SHA1 digest of its framed bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; HASH_BYTE_LEN]);

impl Hash {
    /// Returns the SHA1 hash for the data passed
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Returns the path fragments an object with this hash is stored under: the first two hex
    /// characters name the directory and the other 38 the file.
    pub fn split_hex(&self) -> (String, String) {
        let mut hex = self.to_string();
        let rest = hex.split_off(2);
        (hex, rest)
    }
}

impl From<[u8; HASH_BYTE_LEN]> for Hash {
    fn from(value: [u8; HASH_BYTE_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; HASH_BYTE_LEN] = value.try_into().map_err(|_| {
            Error::Arg(format!(
                "expected {} hash bytes, got {}",
                HASH_BYTE_LEN,
                value.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl FromStr for Hash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::Arg(format!("{s}: {e}")))?;
        Hash::try_from(bytes.as_slice())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hash({})", self)
    }
}

// Tests
