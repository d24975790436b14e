//! Deterministic JSON serialization for the generated files.
//!
//! Output is stable across runs:
//! - Object keys in declaration order (struct field order, or insertion
//!   order for `serde_json::Value`)
//! - 2-space indentation
//! - Non-ASCII characters written as-is, UTF-8 without BOM
//! - Trailing newline

mod json;

pub use json::*;
