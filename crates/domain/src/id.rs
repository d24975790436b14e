//! ID generation utilities.

use uuid::{Uuid, Version};

use crate::error::{DomainError, DomainResult};

/// Generates a new random UUID v4 as a string.
///
/// Used for `_postman_id`, which must never repeat between runs.
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Checks that `id` is a hyphenated UUID v4.
///
/// # Errors
///
/// Returns [`DomainError::InvalidIdentifier`] if the string does not parse
/// or carries another version.
pub fn parse_v4(id: &str) -> DomainResult<Uuid> {
    let uuid = Uuid::parse_str(id).map_err(|e| DomainError::InvalidIdentifier(e.to_string()))?;
    if uuid.get_version() != Some(Version::Random) {
        return Err(DomainError::InvalidIdentifier(format!(
            "{id} is not a version 4 UUID"
        )));
    }
    Ok(uuid)
}
