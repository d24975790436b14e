//! `{{variable}}` placeholder scanner.

use std::ops::Range;

/// A `{{name}}` placeholder found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name, trimmed, without braces.
    pub name: String,
    /// Postman dynamic variable such as `{{$guid}}`; never defined in an environment.
    pub is_dynamic: bool,
    /// Byte range of the whole placeholder, braces included.
    pub span: Range<usize>,
}

/// Finds every placeholder in `input`, left to right.
///
/// Empty placeholders (`{{}}`, `{{  }}`) are skipped. Scanning stops at the
/// first `{{` that is never closed.
///
/// # Examples
///
/// ```
/// use postman_template_application::variables::parse_variables;
///
/// let refs = parse_variables("{{base_url}}/users/{{$guid}}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "base_url");
/// assert!(refs[1].is_dynamic);
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    let mut references = Vec::new();
    let mut cursor = 0;

    while let Some(open) = input[cursor..].find("{{") {
        let start = cursor + open;
        let body_start = start + 2;
        let Some(close) = input[body_start..].find("}}") else {
            break;
        };
        let end = body_start + close + 2;
        let name = input[body_start..body_start + close].trim();
        if !name.is_empty() {
            references.push(VariableReference {
                name: name.to_string(),
                is_dynamic: name.starts_with('$'),
                span: start..end,
            });
        }
        cursor = end;
    }

    references
}
