//! JSON file credential store.
//!
//! The whole directory of accounts lives in one pretty-printed JSON object
//! keyed by email. Every load reads the file afresh and every save replaces
//! it atomically. File access goes through `cap_std` handles scoped to the
//! file's parent directory and runs on the blocking pool.

mod atomic_io;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use std::io;
use tracing::debug;

use crate::domain::UserDirectory;
use crate::domain::ports::{CredentialStore, StoreError};
use crate::domain::trace_id::spawn_blocking_in_scope;

use atomic_io::write_atomic;

/// Credential store persisted as a JSON file.
///
/// # Examples
/// ```
/// use backend::outbound::credential_file::JsonCredentialFile;
///
/// let store = JsonCredentialFile::new("data/users.json").expect("file path");
/// assert_eq!(store.path().as_str(), "data/users.json");
/// ```
#[derive(Debug, Clone)]
pub struct JsonCredentialFile {
    path: Utf8PathBuf,
    parent: Utf8PathBuf,
    file_name: String,
}

impl JsonCredentialFile {
    /// Point the store at `path`. The file and its parent directory are
    /// created on the first save.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when `path` does not name a file.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .ok_or_else(|| StoreError::io(format!("credential path '{path}' must name a file")))?
            .to_owned();
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .map_or_else(|| Utf8PathBuf::from("."), Utf8Path::to_path_buf);
        Ok(Self {
            path,
            parent,
            file_name,
        })
    }

    /// Location of the credential file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_blocking(&self) -> Result<UserDirectory, StoreError> {
        let dir = match Dir::open_ambient_dir(&self.parent, ambient_authority()) {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(UserDirectory::default()),
            Err(err) => return Err(self.io_error("open directory", &err)),
        };
        let contents = match dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path, "credential file absent; starting empty");
                return Ok(UserDirectory::default());
            }
            Err(err) => return Err(self.io_error("read", &err)),
        };
        serde_json::from_str(&contents)
            .map_err(|err| StoreError::corrupt(format!("{}: {err}", self.path)))
    }

    fn write_blocking(&self, users: &UserDirectory) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(users)
            .map_err(|err| StoreError::io(format!("failed to encode accounts: {err}")))?;
        Dir::create_ambient_dir_all(&self.parent, ambient_authority())
            .map_err(|err| self.io_error("create directory for", &err))?;
        let dir = Dir::open_ambient_dir(&self.parent, ambient_authority())
            .map_err(|err| self.io_error("open directory", &err))?;
        write_atomic(&dir, &self.file_name, &contents)
    }

    fn io_error(&self, action: &str, err: &io::Error) -> StoreError {
        StoreError::io(format!("failed to {action} {}: {err}", self.path))
    }
}

#[async_trait]
impl CredentialStore for JsonCredentialFile {
    async fn load(&self) -> Result<UserDirectory, StoreError> {
        let store = self.clone();
        spawn_blocking_in_scope(move || store.read_blocking())
            .await
            .map_err(|err| StoreError::io(format!("credential read task failed: {err}")))?
    }

    async fn save(&self, users: &UserDirectory) -> Result<(), StoreError> {
        let store = self.clone();
        let users = users.clone();
        spawn_blocking_in_scope(move || store.write_blocking(&users))
            .await
            .map_err(|err| StoreError::io(format!("credential write task failed: {err}")))?
    }
}
