use anyhow::{Context, Result};

use crate::fs::Repository;

/// Creates a new git repository in the work tree of `repository`.
///
/// # Errors
///
/// This function will fail if any of the operations related with the creation of directories and
/// files fail.
pub fn init(repository: &Repository) -> Result<Vec<u8>> {
    let created = repository
        .init()
        .context("could not create repository when initializing")?;

    let message = if created {
        format!(
            "Initialized empty git repository in {}\n",
            repository.git_dir().display()
        )
    } else {
        "The directory is already a git repository\n".to_owned()
    };
    Ok(message.into_bytes())
}
