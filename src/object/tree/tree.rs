use std::ffi::{OsStr, OsString};
use std::fmt::Display;
use std::io::{Cursor, Write};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

use byteorder::WriteBytesExt;

use crate::byteable::Byteable;
use crate::hashing::{HASH_BYTE_LEN, Hash};
use crate::object::{NULL_BYTE, ObjectType, SPACE_BYTE};
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

pub const MODE_FILE: &str = "100644";
pub const MODE_EXECUTABLE: &str = "100755";
pub const MODE_SYMLINK: &str = "120000";
pub const MODE_TREE: &str = "40000";
pub const MODE_GITLINK: &str = "160000";

/// Struct that represents a single tree entry in a tree object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// The mode is kept exactly as it was written, e.g. "100644" or "40000".
    pub mode: String,
    pub name: OsString,
    pub hash: Hash,
}

impl TreeEntry {
    pub fn new(mode: impl Into<String>, name: impl Into<OsString>, hash: Hash) -> Self {
        Self {
            mode: mode.into(),
            name: name.into(),
            hash,
        }
    }

    /// Kind of the object this entry points to, derived from its mode.
    pub fn kind(&self) -> ObjectType {
        match self.mode.as_str() {
            MODE_TREE => ObjectType::Tree,
            MODE_GITLINK => ObjectType::Commit,
            _ => ObjectType::Blob,
        }
    }
}

impl Display for TreeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0>6} {} {}\t{}",
            self.mode,
            self.kind(),
            self.hash,
            self.name.to_string_lossy(),
        )
    }
}

/// One directory level: its entries, always kept in canonical order when built through
/// [`Tree::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Creates a tree sorting `entries` by the bytes of their names. The order is part of the
    /// encoded bytes, so two trees with the same entries always get the same hash.
    pub fn new(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Self { entries }
    }

    #[allow(unused)]
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }

    /// Renders the entries one per line in the same layout `ls-tree` uses.
    pub fn display(&self) -> String {
        let mut s = String::new();
        for e in &self.entries {
            s.push_str(&e.to_string());
            s.push('\n');
        }
        s
    }
}

/// Where the decoder is while walking through a tree payload.
enum DecodeState {
    ReadMode,
    ReadName { mode: String },
    ReadHash { mode: String, name: OsString },
    Done,
}

impl Byteable for Tree {
    /// Encodes the entries with no separator between them, each one with this format:
    ///
    /// "`{mode} {name}\0{20 raw hash bytes}`"
    fn as_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        for e in &self.entries {
            cursor.write_all(e.mode.as_bytes())?;
            cursor.write_u8(SPACE_BYTE)?;
            cursor.write_all(e.name.as_bytes())?;
            cursor.write_u8(NULL_BYTE)?;
            cursor.write_all(e.hash.as_ref())?;
        }
        Ok(cursor.into_inner())
    }

    /// Decodes a tree payload moving a cursor forward.
    ///
    /// The hash of every entry is read as exactly 20 bytes whatever they contain, so a hash with
    /// null bytes or spaces in it never gets mistaken for a delimiter. Entries are returned in
    /// the order they appear.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let mut entries = Vec::new();
        let mut state = DecodeState::ReadMode;

        loop {
            state = match state {
                DecodeState::ReadMode => {
                    if cursor.is_exhausted() {
                        DecodeState::Done
                    } else {
                        let mode_buf = cursor
                            .read_until_checked(SPACE_BYTE)
                            .map_err(|_| Error::corrupt("expected space after tree entry mode"))?;
                        if mode_buf.is_empty() {
                            return Err(Error::corrupt("tree entry mode is empty"));
                        }
                        let mode = String::from_utf8(mode_buf)
                            .map_err(|_| Error::corrupt("tree entry mode is not ascii"))?;
                        DecodeState::ReadName { mode }
                    }
                }
                DecodeState::ReadName { mode } => {
                    let name_buf = cursor
                        .read_until_checked(NULL_BYTE)
                        .map_err(|_| Error::corrupt("expected null byte after tree entry name"))?;
                    if name_buf.is_empty() {
                        return Err(Error::corrupt("tree entry name is empty"));
                    }
                    DecodeState::ReadHash {
                        mode,
                        name: OsString::from_vec(name_buf),
                    }
                }
                DecodeState::ReadHash { mode, name } => {
                    let hash_buf = cursor.read_exact_checked(HASH_BYTE_LEN).map_err(|_| {
                        Error::corrupt(format!(
                            "truncated hash for tree entry {:?}",
                            OsStr::new(&name)
                        ))
                    })?;
                    entries.push(TreeEntry {
                        mode,
                        name,
                        hash: Hash::try_from(hash_buf.as_slice())?,
                    });
                    DecodeState::ReadMode
                }
                DecodeState::Done => break,
            };
        }

        Ok(Tree { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const TEST_HASH_1: &str = "99ad2293829e9638b4dfeeb7bc405a4d140e84e3";
    const TEST_HASH_2: &str = "3e9713cc8320cc020e39b53566b2a34022608edc";
    const TEST_HASH_3: &str = "99800b85d3383e3a2fb45eb7d0066a4879a9dad0";

    fn create_test_entry(mode: &str, name: &str, hash: &str) -> TreeEntry {
        TreeEntry::new(mode, name, Hash::from_str(hash).unwrap())
    }

    fn create_test_entries() -> Vec<TreeEntry> {
        vec![
            create_test_entry(MODE_FILE, "file1.txt", TEST_HASH_1),
            create_test_entry(MODE_EXECUTABLE, "script.sh", TEST_HASH_2),
            create_test_entry(MODE_TREE, "subdir", TEST_HASH_3),
        ]
    }

    #[test]
    fn test_as_bytes_empty_tree() {
        let tree = Tree::new(vec![]);
        assert!(tree.as_bytes().unwrap().is_empty());
    }

    #[test]
    fn test_as_bytes_layout() {
        let hash = Hash::from_str(TEST_HASH_1).unwrap();
        let tree = Tree::new(vec![TreeEntry::new(MODE_FILE, "a.txt", hash)]);

        let mut expected = b"100644 a.txt\0".to_vec();
        expected.extend_from_slice(hash.as_ref());
        assert_eq!(expected, tree.as_bytes().unwrap());
    }

    #[test]
    fn test_new_sorts_by_name_bytes() {
        let tree = Tree::new(vec![
            create_test_entry(MODE_TREE, "sub", TEST_HASH_1),
            create_test_entry(MODE_FILE, "a.txt", TEST_HASH_2),
            create_test_entry(MODE_FILE, "B.txt", TEST_HASH_3),
        ]);
        let names: Vec<_> = tree.entries().iter().map(|e| e.name.clone()).collect();
        // uppercase letters sort before lowercase ones byte-wise
        assert_eq!(vec!["B.txt", "a.txt", "sub"], names);
    }

    #[test]
    fn test_order_changes_bytes() {
        let sorted = Tree::new(create_test_entries());
        let mut reversed_entries = create_test_entries();
        reversed_entries.reverse();
        let reversed = Tree {
            entries: reversed_entries,
        };
        assert_ne!(sorted.as_bytes().unwrap(), reversed.as_bytes().unwrap());
        assert_eq!(sorted, Tree::new(reversed.into_entries()));
    }

    #[test]
    fn test_roundtrip_consistency() {
        let tree = Tree::new(create_test_entries());
        let decoded = Tree::from_bytes(&tree.as_bytes().unwrap()).unwrap();
        assert_eq!(tree, decoded);
    }

    #[test]
    fn test_roundtrip_hashes_with_delimiter_bytes() {
        let mut with_null = [0xab; HASH_BYTE_LEN];
        with_null[0] = NULL_BYTE;
        with_null[10] = NULL_BYTE;
        let mut with_space = [SPACE_BYTE; HASH_BYTE_LEN];
        with_space[19] = NULL_BYTE;
        // looks like the start of another entry
        let mut with_digits = [b'1'; HASH_BYTE_LEN];
        with_digits[6] = SPACE_BYTE;

        let tree = Tree::new(vec![
            TreeEntry::new(MODE_FILE, "a", Hash::from(with_null)),
            TreeEntry::new(MODE_EXECUTABLE, "b", Hash::from(with_space)),
            TreeEntry::new(MODE_TREE, "c", Hash::from(with_digits)),
            TreeEntry::new(MODE_SYMLINK, "d", Hash::from([0xff; HASH_BYTE_LEN])),
        ]);

        let decoded = Tree::from_bytes(&tree.as_bytes().unwrap()).unwrap();
        assert_eq!(tree, decoded);
    }

    #[test]
    fn test_all_zero_hash_does_not_hide_next_entry() {
        let second_hash = Hash::from_str(TEST_HASH_2).unwrap();

        let mut bytes = b"100644 first.txt\0".to_vec();
        bytes.extend_from_slice(&[0u8; HASH_BYTE_LEN]);
        bytes.extend_from_slice(b"40000 second\0");
        bytes.extend_from_slice(second_hash.as_ref());

        let tree = Tree::from_bytes(&bytes).unwrap();
        let entries = tree.entries();
        assert_eq!(2, entries.len());
        assert_eq!(Hash::from([0u8; HASH_BYTE_LEN]), entries[0].hash);
        assert_eq!("40000", entries[1].mode);
        assert_eq!("second", entries[1].name);
        assert_eq!(second_hash, entries[1].hash);
    }

    #[test]
    fn test_from_bytes_empty() {
        let tree = Tree::from_bytes(b"").unwrap();
        assert!(tree.entries().is_empty());
    }

    #[test]
    fn test_from_bytes_keeps_stored_order() {
        let mut bytes = Vec::new();
        for (name, hash) in [("z", TEST_HASH_1), ("a", TEST_HASH_2)] {
            bytes.extend_from_slice(format!("100644 {name}\0").as_bytes());
            bytes.extend_from_slice(Hash::from_str(hash).unwrap().as_ref());
        }
        let tree = Tree::from_bytes(&bytes).unwrap();
        assert_eq!("z", tree.entries()[0].name);
        assert_eq!("a", tree.entries()[1].name);
    }

    #[test]
    fn test_from_bytes_missing_space_after_mode() {
        let result = Tree::from_bytes(b"100644filename\0");
        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_from_bytes_missing_null_after_name() {
        let result = Tree::from_bytes(b"100644 filename");
        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_from_bytes_incomplete_hash() {
        let result = Tree::from_bytes(b"100644 file\0short_hash");
        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_from_bytes_trailing_garbage() {
        let mut bytes = Tree::new(create_test_entries()).as_bytes().unwrap();
        bytes.extend_from_slice(b"100644");
        let result = Tree::from_bytes(&bytes);
        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_mode_is_not_interpreted() {
        let entry = create_test_entry("160000", "module", TEST_HASH_1);
        let tree = Tree::new(vec![entry.clone()]);
        let decoded = Tree::from_bytes(&tree.as_bytes().unwrap()).unwrap();
        assert_eq!(entry, decoded.entries()[0]);
    }

    #[test]
    fn test_kind_from_mode() {
        let kinds: Vec<_> = [MODE_FILE, MODE_EXECUTABLE, MODE_SYMLINK, MODE_TREE, MODE_GITLINK]
            .into_iter()
            .map(|mode| create_test_entry(mode, "entry", TEST_HASH_1).kind())
            .collect();
        assert_eq!(
            vec![
                ObjectType::Blob,
                ObjectType::Blob,
                ObjectType::Blob,
                ObjectType::Tree,
                ObjectType::Commit,
            ],
            kinds
        );
    }

    #[test]
    fn test_display_gitlink() {
        let entry = create_test_entry(MODE_GITLINK, "module", TEST_HASH_2);
        assert_eq!(
            format!("160000 commit {}\tmodule", TEST_HASH_2),
            entry.to_string()
        );
    }

    #[test]
    fn test_display() {
        let tree = Tree::new(vec![
            create_test_entry(MODE_FILE, "file1.txt", TEST_HASH_1),
            create_test_entry(MODE_TREE, "subdir", TEST_HASH_3),
        ]);
        let expected = format!(
            "100644 blob {}\tfile1.txt\n040000 tree {}\tsubdir\n",
            TEST_HASH_1, TEST_HASH_3
        );
        assert_eq!(expected, tree.display());
    }
}
