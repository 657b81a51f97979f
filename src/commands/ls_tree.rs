use std::os::unix::ffi::OsStrExt;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::fs::Repository;
use crate::hashing::Hash;

pub fn ls_tree(repository: &Repository, hash: &str, name_only: bool) -> Result<Vec<u8>> {
    let hash = Hash::from_str(hash).context("tree hash was invalid")?;
    let entries = repository
        .objects()
        .list_tree(&hash)
        .context("could not read tree")?;

    let mut output = Vec::new();
    for e in entries {
        if name_only {
            output.extend_from_slice(e.name.as_bytes());
            output.push(b'\n');
        } else {
            output.extend_from_slice(format!("{}\n", e).as_bytes());
        }
    }
    Ok(output)
}
