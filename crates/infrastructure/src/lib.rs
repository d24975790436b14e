//! Postman Template Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::SystemClock;
pub use config::GeneratorConfig;
pub use persistence::{COLLECTION_FILE_NAME, ENVIRONMENT_FILE_NAME, FileDocumentStore};
pub use serialization::{
    SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes,
    validate_json,
};
