//! Postman Environment document types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Root structure for Postman Environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanEnvironment {
    /// Environment name
    pub name: String,
    /// Environment variables
    #[serde(default)]
    pub values: Vec<PostmanEnvVariable>,
    /// Scope marker, always `environment` for environment files
    #[serde(rename = "_postman_variable_scope", default = "default_scope")]
    pub postman_variable_scope: String,
    /// When the file was generated (RFC 3339, UTC)
    #[serde(
        rename = "_postman_exported_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub postman_exported_at: Option<String>,
    /// Tool that generated the file
    #[serde(
        rename = "_postman_exported_using",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub postman_exported_using: Option<String>,
}

fn default_scope() -> String {
    "environment".to_string()
}

impl PostmanEnvironment {
    /// Creates an empty environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            postman_variable_scope: default_scope(),
            postman_exported_at: None,
            postman_exported_using: None,
        }
    }

    /// Stamps the export metadata.
    #[must_use]
    pub fn exported(mut self, at: DateTime<Utc>, using: impl Into<String>) -> Self {
        self.postman_exported_at = Some(at.to_rfc3339_opts(SecondsFormat::Millis, true));
        self.postman_exported_using = Some(using.into());
        self
    }

    /// Appends a variable.
    #[must_use]
    pub fn with_variable(mut self, variable: PostmanEnvVariable) -> Self {
        self.values.push(variable);
        self
    }

    /// Finds a variable by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PostmanEnvVariable> {
        self.values.iter().find(|v| v.key == key)
    }

    /// Returns true if `key` is defined (enabled or not).
    #[must_use]
    pub fn defines(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Variable classification; `secret` values are masked by Postman.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    /// Plain text.
    #[default]
    Default,
    /// Masked in the UI.
    Secret,
}

/// Postman environment variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanEnvVariable {
    /// Variable key/name
    pub key: String,
    /// Variable value
    #[serde(default)]
    pub value: String,
    /// Whether the variable is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Variable type (default, secret)
    #[serde(rename = "type", default)]
    pub var_type: VariableType,
    /// Help text shown next to the variable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl PostmanEnvVariable {
    /// Creates an enabled plain-text variable.
    pub fn plain(
        key: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
            var_type: VariableType::Default,
            description: Some(description.into()),
        }
    }

    /// Creates an enabled secret variable.
    pub fn secret(
        key: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            var_type: VariableType::Secret,
            ..Self::plain(key, value, description)
        }
    }

    /// Check if this variable is a secret type
    #[must_use]
    pub fn is_secret(&self) -> bool {
        self.var_type == VariableType::Secret
    }
}
