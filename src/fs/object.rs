use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::byteable::Byteable;
use crate::hashing::Hash;
use crate::object::tree::{Tree, TreeEntry};
use crate::object::{self, Object, ObjectType};
use crate::utils::zlib;
use crate::{Constants, Error, Result};

/// Content addressed storage over the `objects` folder. Every object lives zlib compressed under
/// `objects/{first two hex chars}/{other 38 hex chars}` and is never modified once written.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    path: PathBuf,
}

impl ObjectStore {
    pub fn new(objects_path: PathBuf) -> Self {
        Self { path: objects_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path of the file an object with `hash` is stored in.
    pub fn object_path(&self, hash: &Hash) -> PathBuf {
        let (dir, file) = hash.split_hex();
        self.path.join(dir).join(file)
    }

    /// Returns true if an object with `hash` has already been written.
    pub fn exists(&self, hash: &Hash) -> bool {
        self.object_path(hash).is_file()
    }

    /// Writes an object with `kind` and `data`, returning its hash.
    ///
    /// Writing an object that already exists does nothing. New objects are written to a
    /// temporary file next to their final location and renamed into place, so a reader never
    /// sees a partially written object.
    ///
    /// # Errors
    ///
    /// This function can fail if the object folder could not be created or the object could not
    /// be written.
    pub fn put(&self, kind: ObjectType, data: &[u8]) -> Result<Hash> {
        let framed = object::frame(kind, data)?;
        let hash = Hash::compute(&framed);

        let object_path = self.object_path(&hash);
        if self.exists(&hash) {
            log::debug!("object {} already exists, skipping write", hash);
            return Ok(hash);
        }

        let folder_path = object_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());
        // already existing folders are fine
        fs::create_dir_all(&folder_path)?;

        let compressed = zlib::compress(&framed)?;
        let temp_path = folder_path.join(temp_file_name());
        if let Err(e) = write_new_file(&temp_path, &compressed) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        match fs::rename(&temp_path, &object_path) {
            Ok(()) => {}
            // someone else wrote the same object in the meantime
            Err(_) if object_path.is_file() => {
                let _ = fs::remove_file(&temp_path);
            }
            Err(e) => {
                let _ = fs::remove_file(&temp_path);
                return Err(e.into());
            }
        }

        log::debug!("wrote {} {} ({} bytes)", kind, hash, data.len());
        Ok(hash)
    }

    pub fn put_blob(&self, data: &[u8]) -> Result<Hash> {
        self.put(ObjectType::Blob, data)
    }

    /// Reads the object with `hash`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if there is no such object and `Error::CorruptObject` if the
    /// stored file can't be decompressed, is malformed or doesn't hash to `hash`.
    pub fn get(&self, hash: &Hash) -> Result<Object> {
        let data = match fs::read(self.object_path(hash)) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::NotFound(*hash)),
            Err(e) => return Err(e.into()),
        };

        let framed = zlib::decompress(&data)?;
        let actual = Hash::compute(&framed);
        if actual != *hash {
            return Err(Error::corrupt(format!(
                "object {} hashes to {}",
                hash, actual
            )));
        }

        Object::from_bytes(&framed)
    }

    /// Reads the tree with `hash`, returning its entries in stored order.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`ObjectStore::get`], this fails with `Error::UnexpectedKind` if the
    /// object is not a tree.
    pub fn list_tree(&self, hash: &Hash) -> Result<Vec<TreeEntry>> {
        let object = self.get(hash)?;
        if object.kind != ObjectType::Tree {
            return Err(Error::UnexpectedKind {
                hash: *hash,
                expected: ObjectType::Tree,
                actual: object.kind,
            });
        }
        Ok(Tree::from_bytes(&object.data)?.into_entries())
    }
}

fn write_new_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create_new(path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn temp_file_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    format!(
        "{}{}_{}",
        Constants::TEMP_OBJECT_PREFIX,
        std::process::id(),
        nanos
    )
}
