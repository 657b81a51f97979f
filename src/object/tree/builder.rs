use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::Constants;
use crate::Result;
use crate::byteable::Byteable;
use crate::fs::object::ObjectStore;
use crate::hashing::Hash;
use crate::object::ObjectType;

use super::{MODE_EXECUTABLE, MODE_FILE, MODE_SYMLINK, MODE_TREE, Tree, TreeEntry};

/// Walks a directory writing a blob for every file and a tree for every directory, bottom-up.
pub struct TreeBuilder<'a> {
    store: &'a ObjectStore,
    /// Name of the directory holding the repository itself, skipped at every level.
    excluded: OsString,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(store: &'a ObjectStore) -> Self {
        Self {
            store,
            excluded: OsString::from(Constants::REPOSITORY_FOLDER_NAME),
        }
    }

    /// Builds the tree for `root` and every directory below it, returning the hash of the tree
    /// for `root`.
    ///
    /// Symbolic links are stored as blobs holding the link target, never followed.
    ///
    /// # Errors
    ///
    /// The whole build is aborted on the first entry that can't be read or stored.
    pub fn build(&self, root: &Path) -> Result<Hash> {
        let mut entries = Vec::new();

        for direntry in fs::read_dir(root)? {
            let direntry = direntry?;
            let name = direntry.file_name();
            if name == self.excluded {
                continue;
            }

            let path = direntry.path();
            let metadata = fs::symlink_metadata(&path)?;
            let file_type = metadata.file_type();

            let (mode, hash) = if file_type.is_symlink() {
                let target = fs::read_link(&path)?;
                (MODE_SYMLINK, self.write_blob(target.as_os_str())?)
            } else if file_type.is_dir() {
                (MODE_TREE, self.build(&path)?)
            } else if file_type.is_file() {
                let mode = if metadata.permissions().mode() & 0o111 != 0 {
                    MODE_EXECUTABLE
                } else {
                    MODE_FILE
                };
                let data = fs::read(&path)?;
                (mode, self.store.put(ObjectType::Blob, &data)?)
            } else {
                log::warn!("skipping {:?}, unsupported file type", path);
                continue;
            };

            log::trace!("{} {} {:?}", mode, hash, path);
            entries.push(TreeEntry::new(mode, name, hash));
        }

        let tree = Tree::new(entries);
        self.store.put(ObjectType::Tree, &tree.as_bytes()?)
    }

    fn write_blob(&self, data: &OsStr) -> Result<Hash> {
        self.store.put(ObjectType::Blob, data.as_bytes())
    }
}
