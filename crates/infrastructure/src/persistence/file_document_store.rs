//! File-based document store.
//!
//! Documents are written next to each other in one output directory:
//! ```text
//! <output_dir>/
//!   template-postman-collection.json
//!   template-postman-environment.json
//! ```
//! Each file is written to a temporary sibling first and renamed over the
//! target, so a reader sees either the previous file or the new one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use postman_template_application::ports::{DocumentStore, StoreError};
use postman_template_domain::postman::{PostmanCollection, PostmanEnvironment};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::serialization::to_json_stable_bytes;

/// Default collection file name.
pub const COLLECTION_FILE_NAME: &str = "template-postman-collection.json";
/// Default environment file name.
pub const ENVIRONMENT_FILE_NAME: &str = "template-postman-environment.json";

/// Writes documents as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    output_dir: PathBuf,
}

impl FileDocumentStore {
    /// Creates a store writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Target path of the collection file.
    #[must_use]
    pub fn collection_path(&self) -> PathBuf {
        self.output_dir.join(COLLECTION_FILE_NAME)
    }

    /// Target path of the environment file.
    #[must_use]
    pub fn environment_path(&self) -> PathBuf {
        self.output_dir.join(ENVIRONMENT_FILE_NAME)
    }

    fn write_document<T: Serialize>(&self, path: &Path, document: &T) -> Result<(), StoreError> {
        let content = to_json_stable_bytes(document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| StoreError::from_io(&self.output_dir, e))?;

        write_atomic(path, &self.output_dir, &content)?;
        debug!(path = %path.display(), bytes = content.len(), "document replaced");
        Ok(())
    }
}

/// Writes `content` to a temp file in `dir` and renames it onto `path`.
///
/// The replacement keeps the mode of the file it replaces.
fn write_atomic(path: &Path, dir: &Path, content: &[u8]) -> Result<(), StoreError> {
    let mut tmp = new_temp_file(dir)?;
    tmp.write_all(content)
        .map_err(|e| StoreError::from_io(tmp.path(), e))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| StoreError::from_io(tmp.path(), e))?;
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::from_io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::from_io(path, e.error))?;
    Ok(())
}

/// Temp files default to `0600`; ask for `0666` so the umask applies as it
/// would for a plain `File::create`.
#[cfg(unix)]
fn new_temp_file(dir: &Path) -> Result<NamedTempFile, StoreError> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
        .map_err(|e| StoreError::from_io(dir, e))
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> Result<NamedTempFile, StoreError> {
    NamedTempFile::new_in(dir).map_err(|e| StoreError::from_io(dir, e))
}

impl DocumentStore for FileDocumentStore {
    fn save_collection(&self, collection: &PostmanCollection) -> Result<PathBuf, StoreError> {
        let path = self.collection_path();
        self.write_document(&path, collection)?;
        Ok(path)
    }

    fn save_environment(&self, environment: &PostmanEnvironment) -> Result<PathBuf, StoreError> {
        let path = self.environment_path();
        self.write_document(&path, environment)?;
        Ok(path)
    }
}
