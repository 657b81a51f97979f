use std::str::FromStr;

use anyhow::{Context, Result};

use crate::byteable::Byteable;
use crate::fs::Repository;
use crate::hashing::Hash;
use crate::object::ObjectType;
use crate::object::tree::Tree;

pub fn cat_file(
    repository: &Repository,
    hash: &str,
    pretty: bool,
    kind: bool,
    size: bool,
) -> Result<Vec<u8>> {
    let hash = Hash::from_str(hash).context("object hash was invalid")?;
    let object = repository
        .objects()
        .get(&hash)
        .context("could not read object")?;

    if kind {
        return Ok(format!("{}\n", object.kind).into_bytes());
    }
    if size {
        return Ok(format!("{}\n", object.data.len()).into_bytes());
    }

    debug_assert!(pretty);
    match object.kind {
        // trees hold raw hashes, they are shown like ls-tree does
        ObjectType::Tree => Ok(Tree::from_bytes(&object.data)
            .context("could not read tree entries")?
            .display()
            .into_bytes()),
        ObjectType::Blob | ObjectType::Commit => Ok(object.data),
    }
}
