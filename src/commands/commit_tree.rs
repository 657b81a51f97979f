use std::str::FromStr;

use anyhow::{Context, Result};

use crate::fs::Repository;
use crate::hashing::Hash;
use crate::object::ObjectType;
use crate::object::commit::{CommitUser, CommitUserKind};

/// Creates a commit for `tree` with identities taken from the environment.
///
/// # Errors
///
/// This function fails if any hash is invalid or does not point to an object of the expected
/// type.
pub fn commit_tree(
    repository: &Repository,
    tree: &str,
    parents: &[String],
    message: &str,
) -> Result<Vec<u8>> {
    let tree = parse_checked(repository, tree, ObjectType::Tree)?;
    let parents = parents
        .iter()
        .map(|p| parse_checked(repository, p, ObjectType::Commit))
        .collect::<Result<Vec<Hash>>>()?;

    let mut message = message.to_owned();
    if !message.ends_with('\n') {
        message.push('\n');
    }

    let hash = repository
        .commit(
            tree,
            &parents,
            CommitUser::from_env(CommitUserKind::Author),
            CommitUser::from_env(CommitUserKind::Committer),
            &message,
        )
        .context("could not write commit")?;

    Ok(format!("{}\n", hash).into_bytes())
}

fn parse_checked(repository: &Repository, hash: &str, expected: ObjectType) -> Result<Hash> {
    let hash = Hash::from_str(hash).context(format!("{} hash was invalid", expected))?;
    let object = repository
        .objects()
        .get(&hash)
        .context(format!("could not read {} {}", expected, hash))?;
    if object.kind != expected {
        return Err(crate::Error::UnexpectedKind {
            hash,
            expected,
            actual: object.kind,
        }
        .into());
    }
    Ok(hash)
}
