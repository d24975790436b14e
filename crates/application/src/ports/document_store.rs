//! Document store port
//!
//! Where generated documents end up. The file-based adapter lives in the
//! infrastructure crate.

use std::path::{Path, PathBuf};

use postman_template_domain::postman::{PostmanCollection, PostmanEnvironment};
use thiserror::Error;

/// Errors raised while persisting a document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The target (or its directory) is not writable.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other I/O failure, e.g. a full disk.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Classifies an I/O error for `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Persists generated documents, replacing any previous output.
pub trait DocumentStore {
    /// Writes the collection and returns where it went.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded or written.
    fn save_collection(&self, collection: &PostmanCollection) -> Result<PathBuf, StoreError>;

    /// Writes the environment and returns where it went.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded or written.
    fn save_environment(&self, environment: &PostmanEnvironment) -> Result<PathBuf, StoreError>;
}
