//! Generate template files use case.

use std::path::PathBuf;

use postman_template_domain::TemplateProfile;
use postman_template_domain::postman::{PostmanCollection, PostmanEnvironment};
use tracing::{debug, info, warn};

use crate::builder::{build_collection_with, build_environment_with};
use crate::error::{GenerateError, GenerateResult};
use crate::ports::{Clock, DocumentStore};
use crate::validation::{ValidationIssue, validate_documents};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Where the collection was written.
    pub collection_path: PathBuf,
    /// Where the environment was written.
    pub environment_path: PathBuf,
    /// `_postman_id` of the written collection.
    pub collection_id: String,
    /// Environment name to select in Postman after import.
    pub environment_name: String,
    /// Number of folders in the collection.
    pub folder_count: usize,
    /// Number of requests in the collection.
    pub request_count: usize,
    /// Number of environment variables.
    pub variable_count: usize,
    /// Non-fatal validation findings.
    pub warnings: Vec<ValidationIssue>,
}

/// Use case that builds, checks and writes both Postman documents.
pub struct GenerateTemplateFiles<S: DocumentStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: DocumentStore, C: Clock> GenerateTemplateFiles<S, C> {
    /// Creates a new `GenerateTemplateFiles` use case.
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Runs one generation.
    ///
    /// The collection is written before the environment; if the second write
    /// fails the first file stays in place.
    ///
    /// # Errors
    /// - Returns [`GenerateError::Config`] if the profile is invalid
    /// - Returns [`GenerateError::Validation`] if the documents are
    ///   inconsistent; nothing is written in that case
    /// - Returns [`GenerateError::Storage`] if a write fails
    pub fn execute(&self, profile: &TemplateProfile) -> GenerateResult<GenerationSummary> {
        profile.validate()?;

        let collection = build_collection_with(profile);
        let environment = build_environment_with(profile, self.clock.now());
        debug!(
            collection_id = %collection.info.postman_id,
            environment = %environment.name,
            "documents built"
        );

        self.write_checked(&collection, &environment)
    }

    /// Validates both documents and writes them when no error-level issue
    /// was found.
    fn write_checked(
        &self,
        collection: &PostmanCollection,
        environment: &PostmanEnvironment,
    ) -> GenerateResult<GenerationSummary> {
        let report = validate_documents(collection, environment);
        for issue in report.warnings() {
            warn!(path = %issue.path, "{}", issue.message);
        }
        if !report.is_valid() {
            return Err(GenerateError::Validation(
                report.errors().cloned().collect(),
            ));
        }

        let collection_path = self.store.save_collection(collection)?;
        info!(path = %collection_path.display(), "collection written");
        let environment_path = self.store.save_environment(environment)?;
        info!(path = %environment_path.display(), "environment written");

        Ok(GenerationSummary {
            collection_path,
            environment_path,
            collection_id: collection.info.postman_id.clone(),
            environment_name: environment.name.clone(),
            folder_count: collection.folder_count(),
            request_count: collection.requests().len(),
            variable_count: environment.values.len(),
            warnings: report.warnings().cloned().collect(),
        })
    }
}
