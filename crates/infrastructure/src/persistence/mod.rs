//! File output.

mod file_document_store;

pub use file_document_store::{COLLECTION_FILE_NAME, ENVIRONMENT_FILE_NAME, FileDocumentStore};
