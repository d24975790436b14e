//! Template profile
//!
//! The handful of values that differ between deployments of the template
//! backend. Everything else in the generated documents is fixed.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Values substituted into the generated collection and environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateProfile {
    /// Collection display name.
    pub collection_name: String,
    /// Environment display name; also the name users select in Postman.
    pub environment_name: String,
    /// API root, stored as `base_url`.
    pub api_base_url: String,
    /// Server root without the API prefix, stored as `baseUrl`.
    pub server_url: String,
    /// Account used by the register request and the auto-login script.
    pub test_email: String,
    /// Password for [`Self::test_email`].
    pub test_password: String,
}

impl Default for TemplateProfile {
    fn default() -> Self {
        Self {
            collection_name: "Spring Boot Base Template API".to_string(),
            environment_name: "Spring Boot Base Template".to_string(),
            api_base_url: "http://localhost:8080/api/v1".to_string(),
            server_url: "http://localhost:8080".to_string(),
            test_email: "test@template.com".to_string(),
            test_password: "test1234".to_string(),
        }
    }
}

impl TemplateProfile {
    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Config`] for the first empty field, a URL
    /// without an `http`/`https` scheme, or an email without `@`.
    pub fn validate(&self) -> DomainResult<()> {
        require("collection_name", &self.collection_name)?;
        require("environment_name", &self.environment_name)?;
        require_http_url("api_base_url", &self.api_base_url)?;
        require_http_url("server_url", &self.server_url)?;
        require("test_email", &self.test_email)?;
        if !self.test_email.contains('@') {
            return Err(DomainError::config("test_email", "must contain '@'"));
        }
        require("test_password", &self.test_password)
    }
}

fn require(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::config(field, "must not be empty"));
    }
    Ok(())
}

fn require_http_url(field: &'static str, value: &str) -> DomainResult<()> {
    require(field, value)?;
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(DomainError::config(
            field,
            format!("`{value}` must start with http:// or https://"),
        ));
    }
    if value.ends_with('/') {
        return Err(DomainError::config(
            field,
            format!("`{value}` must not end with '/'"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert_eq!(TemplateProfile::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_field_rejected() {
        let profile = TemplateProfile {
            test_password: "  ".to_string(),
            ..TemplateProfile::default()
        };
        assert_eq!(
            profile.validate(),
            Err(DomainError::config("test_password", "must not be empty"))
        );
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let profile = TemplateProfile {
            api_base_url: "localhost:8080/api/v1".to_string(),
            ..TemplateProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(DomainError::Config { field: "api_base_url", .. })
        ));
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let profile = TemplateProfile {
            server_url: "https://api.example.com/".to_string(),
            ..TemplateProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(DomainError::Config { field: "server_url", .. })
        ));
    }

    #[test]
    fn test_email_without_at_rejected() {
        let profile = TemplateProfile {
            test_email: "tester".to_string(),
            ..TemplateProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(DomainError::Config { field: "test_email", .. })
        ));
    }
}
