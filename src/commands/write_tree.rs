use anyhow::{Context, Result};

use crate::fs::Repository;

pub fn write_tree(repository: &Repository) -> Result<Vec<u8>> {
    let hash = repository
        .build_tree()
        .context(format!("could not write tree for {:?}", repository.work_tree()))?;
    Ok(format!("{}\n", hash).into_bytes())
}
