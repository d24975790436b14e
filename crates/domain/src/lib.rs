//! Postman Template Domain - Core document types
//!
//! This crate defines the Postman collection and environment documents the
//! generator writes, the scripts embedded in them and the template profile.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod id;
pub mod postman;
pub mod profile;
pub mod scripts;

pub use error::{DomainError, DomainResult};
pub use id::{generate_id, parse_v4};
pub use postman::{PostmanCollection, PostmanEnvironment};
pub use profile::TemplateProfile;
