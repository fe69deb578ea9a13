//! Raw persistence of fixed-width tables.
//!
//! Each table is one file of little-endian unsigned integers in domain
//! enumeration order, with no header or checksum. Correctness therefore
//! rests on validating the file length against the element count the
//! current domain constants imply; a mismatch is fatal, never truncated or
//! padded over.

use crate::error::SymTableError;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A directory of table files.
#[derive(Debug)]
pub struct TableStore {
    dir: PathBuf,
}

impl TableStore {
    /// Open a store, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// If the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SymTableError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(TableStore { dir })
    }

    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// # Errors
    ///
    /// On I/O failure or if the file length disagrees with `expected_len`.
    pub fn load_u8(&self, name: &str, expected_len: usize) -> Result<Vec<u8>, SymTableError> {
        let path = self.path(name);
        let bytes = fs::read(&path)?;
        check_len(&path, &bytes, expected_len, 1)?;
        Ok(bytes)
    }

    /// # Errors
    ///
    /// On I/O failure or if the file length disagrees with `expected_len`.
    pub fn load_u16(&self, name: &str, expected_len: usize) -> Result<Vec<u16>, SymTableError> {
        let path = self.path(name);
        let bytes = fs::read(&path)?;
        check_len(&path, &bytes, expected_len, 2)?;
        Ok(bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect())
    }

    /// # Errors
    ///
    /// On I/O failure or if the file length disagrees with `expected_len`.
    pub fn load_u32(&self, name: &str, expected_len: usize) -> Result<Vec<u32>, SymTableError> {
        let path = self.path(name);
        let bytes = fs::read(&path)?;
        check_len(&path, &bytes, expected_len, 4)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    /// # Errors
    ///
    /// On I/O failure.
    pub fn save_u8(&self, name: &str, table: &[u8]) -> Result<(), SymTableError> {
        fs::write(self.path(name), table)?;
        Ok(())
    }

    /// # Errors
    ///
    /// On I/O failure.
    pub fn save_u16(&self, name: &str, table: &[u16]) -> Result<(), SymTableError> {
        let bytes: Vec<u8> = table.iter().flat_map(|v| v.to_le_bytes()).collect();
        fs::write(self.path(name), bytes)?;
        Ok(())
    }

    /// # Errors
    ///
    /// On I/O failure.
    pub fn save_u32(&self, name: &str, table: &[u32]) -> Result<(), SymTableError> {
        let bytes: Vec<u8> = table.iter().flat_map(|v| v.to_le_bytes()).collect();
        fs::write(self.path(name), bytes)?;
        Ok(())
    }
}

fn check_len(
    path: &Path,
    bytes: &[u8],
    expected_len: usize,
    width: usize,
) -> Result<(), SymTableError> {
    if bytes.len() == expected_len * width {
        Ok(())
    } else {
        Err(SymTableError::CacheMismatch {
            path: path.to_path_buf(),
            expected: expected_len * width,
            actual: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = TableStore::new(dir.path()).unwrap();
        let table: Vec<u16> = (0..1000).collect();
        store.save_u16("some_table", &table).unwrap();
        assert!(store.exists("some_table"));
        assert_eq!(store.load_u16("some_table", 1000).unwrap(), table);
    }

    #[test]
    fn truncated_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = TableStore::new(dir.path()).unwrap();
        let table: Vec<u32> = (0..500).collect();
        store.save_u32("rep_table", &table).unwrap();
        let path = store.path("rep_table");
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() - 4]).unwrap();
        match store.load_u32("rep_table", 500) {
            Err(SymTableError::CacheMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 2000);
                assert_eq!(actual, 1996);
            }
            other => panic!("expected a cache mismatch, got {other:?}"),
        }
    }

    #[test]
    fn wrong_expected_length_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = TableStore::new(dir.path()).unwrap();
        store.save_u8("sym_table", &[1, 2, 3]).unwrap();
        assert!(matches!(
            store.load_u8("sym_table", 4),
            Err(SymTableError::CacheMismatch { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let store = TableStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.load_u16("no_such_table", 16),
            Err(SymTableError::Io(_))
        ));
    }
}
