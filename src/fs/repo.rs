use std::fs;
use std::path::{Path, PathBuf};

use crate::hashing::Hash;
use crate::object::commit::{self, CommitUser};
use crate::object::tree::TreeBuilder;
use crate::{Constants, Result};

use super::object::ObjectStore;

/// A work tree together with the `.git` folder inside of it.
///
/// Every operation receives the repository explicitly instead of looking at the current
/// directory.
#[derive(Debug, Clone)]
pub struct Repository {
    work_tree: PathBuf,
    git_dir: PathBuf,
    objects: ObjectStore,
}

impl Repository {
    pub fn new(work_tree: PathBuf) -> Self {
        let git_dir = work_tree.join(Constants::REPOSITORY_FOLDER_NAME);
        let objects = ObjectStore::new(git_dir.join(Constants::OBJECTS_FOLDER_NAME));
        Self {
            work_tree,
            git_dir,
            objects,
        }
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    pub fn refs_path(&self) -> PathBuf {
        self.git_dir.join(Constants::REFS_FOLDER_NAME)
    }

    pub fn head_path(&self) -> PathBuf {
        self.git_dir.join(Constants::HEAD_FILE_NAME)
    }

    /// Returns true if the `.git` folder exists.
    pub fn exists(&self) -> bool {
        self.git_dir.is_dir()
    }

    /// Creates the folder layout and the default HEAD file.
    ///
    /// Returns false without touching anything if the repository already existed.
    ///
    /// # Errors
    ///
    /// This function will fail if any of the folders or the HEAD file could not be created.
    pub fn init(&self) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }

        for p in [
            self.objects.path().to_path_buf(),
            self.refs_path().join(Constants::HEADS_FOLDER_NAME),
        ] {
            fs::create_dir_all(&p)?;
        }
        fs::write(self.head_path(), Constants::DEFAULT_HEAD)?;

        log::info!("initialized repository in {:?}", self.git_dir);
        Ok(true)
    }

    /// Writes the whole work tree as tree objects, returning the hash of the root tree.
    pub fn build_tree(&self) -> Result<Hash> {
        TreeBuilder::new(&self.objects).build(&self.work_tree)
    }

    pub fn commit(
        &self,
        tree: Hash,
        parents: &[Hash],
        author: CommitUser,
        committer: CommitUser,
        message: &str,
    ) -> Result<Hash> {
        commit::create(&self.objects, tree, parents, author, committer, message)
    }
}
