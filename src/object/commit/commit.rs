use crate::fs::object::ObjectStore;
use crate::hashing::Hash;
use crate::object::ObjectType;
use crate::Result;

use super::*;

/// A snapshot: the root tree, the commits it follows, who made it and why.
#[derive(Debug, Clone)]
pub struct Commit {
    pub tree: Hash,
    pub parents: Vec<Hash>,
    pub author: CommitUser,
    pub committer: CommitUser,
    pub message: String,
}

impl Commit {
    /// Returns the commit as the bytes of a string with the following format:
    ///
    /// tree {`tree_hash`}
    /// parent {`parent_hash`} (once per parent, omitted for a root commit)
    /// author {`author.name`} <{`author.email`}> {`author.timestamp`} {`author.timezone`}
    /// committer {`committer.name`} <{`committer.email`}> {`committer.timestamp`} {`committer.timezone`}
    ///
    /// {`message`}
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut file = format!("{} {}\n", TREE_STR, self.tree);
        for hash in self.parents.iter() {
            file.push_str(&format!("{} {}\n", PARENT_STR, hash));
        }
        file.push_str(&format!(
            "{} {}\n",
            CommitUserKind::Author,
            self.author.signature()?
        ));
        file.push_str(&format!(
            "{} {}\n",
            CommitUserKind::Committer,
            self.committer.signature()?
        ));
        file.push('\n');
        file.push_str(&self.message);

        Ok(file.into_bytes())
    }

    /// Stores this commit, returning its hash.
    pub fn write(&self, store: &ObjectStore) -> Result<Hash> {
        store.put(ObjectType::Commit, &self.as_bytes()?)
    }
}

/// Assembles a commit and stores it. `message` is written verbatim.
pub fn create(
    store: &ObjectStore,
    tree: Hash,
    parents: &[Hash],
    author: CommitUser,
    committer: CommitUser,
    message: &str,
) -> Result<Hash> {
    Commit {
        tree,
        parents: parents.to_vec(),
        author,
        committer,
        message: message.to_owned(),
    }
    .write(store)
}

// Tests
