use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::fs::Repository;
use crate::object::{self, ObjectType};

/// Returns the hash of the blob holding the content of `file`, writing it if `write` is set.
pub fn hash_object(repository: &Repository, file: &Path, write: bool) -> Result<Vec<u8>> {
    let path = repository.work_tree().join(file);
    let data = fs::read(&path).context(format!("could not read file {:?}", path))?;

    let hash = if write {
        repository
            .objects()
            .put_blob(&data)
            .context("could not write blob")?
    } else {
        object::hash(ObjectType::Blob, &data)?
    };

    Ok(format!("{}\n", hash).into_bytes())
}
