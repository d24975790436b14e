//! Generator configuration from environment variables.
//!
//! There is no config file and no command-line flag; every knob has a
//! default matching the template backend's local setup.

use std::path::PathBuf;

use postman_template_domain::{DomainError, DomainResult, TemplateProfile};

/// Directory the two JSON files are written to.
pub const OUTPUT_DIR_VAR: &str = "POSTMAN_TEMPLATE_OUTPUT_DIR";
/// Overrides `base_url`.
pub const BASE_URL_VAR: &str = "POSTMAN_TEMPLATE_BASE_URL";
/// Overrides `baseUrl`.
pub const SERVER_URL_VAR: &str = "POSTMAN_TEMPLATE_SERVER_URL";
/// Overrides `test_email`.
pub const TEST_EMAIL_VAR: &str = "POSTMAN_TEMPLATE_TEST_EMAIL";
/// Overrides `test_password`.
pub const TEST_PASSWORD_VAR: &str = "POSTMAN_TEMPLATE_TEST_PASSWORD";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Values substituted into the documents.
    pub profile: TemplateProfile,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            profile: TemplateProfile::default(),
        }
    }
}

impl GeneratorConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Config`] if a variable is set to an unusable value.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Config`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut profile = defaults.profile;

        let output_dir = match lookup(OUTPUT_DIR_VAR) {
            Some(dir) if dir.trim().is_empty() => {
                return Err(DomainError::config("output_dir", "must not be empty"));
            }
            Some(dir) => PathBuf::from(dir),
            None => defaults.output_dir,
        };

        if let Some(value) = lookup(BASE_URL_VAR) {
            profile.api_base_url = value;
        }
        if let Some(value) = lookup(SERVER_URL_VAR) {
            profile.server_url = value;
        }
        if let Some(value) = lookup(TEST_EMAIL_VAR) {
            profile.test_email = value;
        }
        if let Some(value) = lookup(TEST_PASSWORD_VAR) {
            profile.test_password = value;
        }

        profile.validate()?;
        Ok(Self {
            output_dir,
            profile,
        })
    }
}
