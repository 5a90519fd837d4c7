//! Directory-backed key-value store.
//!
//! Each key maps to `<key>.json` inside a capability-scoped directory. Writes
//! go to a sibling temporary file first and are renamed into place, so a
//! crash mid-write leaves the previous value readable.

use crate::board::ports::{KeyValueStore, StorageError, StorageResult};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io::ErrorKind;

/// Key-value store writing one file per key.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(StorageError::backend)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::backend)?;
        Ok(Self { dir })
    }

    /// Wraps an already-opened directory handle.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn file_name_for(key: &str) -> StorageResult<Utf8PathBuf> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(Utf8PathBuf::from(format!("{key}.json")))
}

impl KeyValueStore for FileKeyValueStore {
    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        let target = file_name_for(key)?;
        let staging = Utf8PathBuf::from(format!("{target}.tmp"));
        self.dir
            .write(&staging, value)
            .map_err(StorageError::backend)?;
        self.dir
            .rename(&staging, &self.dir, &target)
            .map_err(StorageError::backend)
    }

    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let target = file_name_for(key)?;
        match self.dir.read_to_string(&target) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        }
    }
}
