//! Filesystem-backed key-value store.
//!
//! Each key maps to one file under the base directory.

use postcraft_error::{PostcraftResult, StorageError, StorageErrorKind};
use postcraft_interface::KeyValueStore;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key-value store keeping one file per key.
///
/// Writes go to a uniquely named temporary sibling that is renamed into place.
/// Readers never see a half-written value and concurrent writers to one key
/// resolve as last write wins.
///
/// ```text
/// {base_path}/
/// ├── style_custom_prompts
/// └── case_favorites
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> PostcraftResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created file store");
        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Map a key onto a file path. Keys that could escape the base directory are rejected.
    fn path_for(&self, key: &str) -> PostcraftResult<PathBuf> {
        let invalid = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\'])
            || key.contains('\0');
        if invalid {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into());
        }
        Ok(self.base_path.join(key))
    }
}

impl KeyValueStore for FileStore {
    #[tracing::instrument(skip(self))]
    fn get(&self, key: &str) -> PostcraftResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Key not present");
                Ok(None)
            }
            Err(e) => Err(StorageError::new(StorageErrorKind::Read(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, value), fields(value_len = value.len()))]
    fn set(&self, key: &str, value: &str) -> PostcraftResult<()> {
        let path = self.path_for(key)?;
        let write_error = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::Write(format!("{}: {}", path.display(), e)))
        };

        let mut temp = NamedTempFile::new_in(&self.base_path).map_err(write_error)?;
        temp.write_all(value.as_bytes()).map_err(write_error)?;
        temp.persist(&path).map_err(|e| write_error(e.error))?;

        tracing::debug!(path = %path.display(), "Stored value");
        Ok(())
    }
}
