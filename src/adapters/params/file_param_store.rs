use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::errors::{KeylinkError, Result};
use crate::core::traits::param_store::ParamStore;

/// Directory-backed parameter store: one file per key, the file content
/// being the value.
///
/// Example layout:
/// ```text
/// params/
///   GithubUsername   -> "alice"
///   GithubSshKeys    -> "ssh-ed25519 AAAA...\nssh-rsa AAAA...\n"
/// ```
///
/// Writes go to a temporary file in the same directory and are renamed
/// into place, so readers never observe a partial value.
#[derive(Clone)]
pub struct FileParamStore {
    dir: PathBuf,
}

impl FileParamStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Return the directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a key to its file, rejecting anything that is not a plain name.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(KeylinkError::InvalidParamKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(key))
    }

    fn write_error(key: &str, path: &Path, e: impl std::fmt::Display) -> KeylinkError {
        KeylinkError::ParamWrite {
            key: key.to_string(),
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }
}

impl ParamStore for FileParamStore {
    fn get(&self, key: &str) -> Result<String> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "param read failed");
                Err(KeylinkError::ParamRead {
                    key: key.to_string(),
                    path,
                })
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| Self::write_error(key, &self.dir, e))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| Self::write_error(key, &path, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| Self::write_error(key, &path, e))?;
        tmp.persist(&path)
            .map_err(|e| Self::write_error(key, &path, e.error))?;

        tracing::debug!(path = %path.display(), "param written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::write_error(key, &path, e)),
        }
    }
}
