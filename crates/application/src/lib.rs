//! Postman Template Application - Builders and use cases
//!
//! This crate assembles the Postman documents, checks them against each
//! other and drives the generation through ports implemented by the
//! infrastructure layer.

pub mod builder;
pub mod error;
pub mod ports;
pub mod use_cases;
pub mod validation;
pub mod variables;

pub use builder::{
    build_collection, build_collection_with, build_environment, build_environment_with,
};
pub use error::{GenerateError, GenerateResult};
pub use use_cases::{GenerateTemplateFiles, GenerationSummary};
pub use validation::{Severity, ValidationIssue, ValidationReport, validate_documents};
