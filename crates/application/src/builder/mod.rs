//! Document builders
//!
//! Pure functions assembling the collection and environment documents. Both
//! are rebuilt from scratch on every run.

mod collection;
mod environment;

pub use collection::{API_HOST, SERVER_HOST, build_collection, build_collection_with};
pub use environment::{EXPORTED_USING, build_environment, build_environment_with};
