//! Consistency checks run on freshly built documents before they are written.
//!
//! A consumer imports both files together, so the checks look across them:
//! every placeholder a request uses must be an environment key, and every
//! structured URL must agree with its `raw` form.

mod report;

pub use report::{Severity, ValidationIssue, ValidationReport};

use postman_template_domain::parse_v4;
use postman_template_domain::postman::{
    AuthType, COLLECTION_SCHEMA_V21, PostmanCollection, PostmanEnvironment, PostmanItem,
};

use crate::variables::parse_variables;

/// Checks the collection on its own and against the environment.
#[must_use]
pub fn validate_documents(
    collection: &PostmanCollection,
    environment: &PostmanEnvironment,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_info(collection, &mut report);

    if let Some(auth) = &collection.auth {
        let token = auth.get_param("token").unwrap_or_default();
        check_placeholders("collection/auth", token, environment, &mut report);
    }

    let inherits_bearer = collection
        .auth
        .as_ref()
        .is_some_and(|auth| auth.auth_type == AuthType::Bearer);

    for (folder, item) in collection.requests() {
        let path = item_path(&folder, item);
        check_request(&path, item, environment, &mut report);
        if inherits_bearer {
            check_auth_endpoint(&path, item, &mut report);
        }
    }

    report
}

fn check_info(collection: &PostmanCollection, report: &mut ValidationReport) {
    let info = &collection.info;
    if info.name.trim().is_empty() {
        report.push(ValidationIssue::error("collection/info", "name is empty"));
    }
    if info.schema != COLLECTION_SCHEMA_V21 {
        report.push(ValidationIssue::error(
            "collection/info",
            format!("unexpected schema `{}`", info.schema),
        ));
    }
    if let Err(e) = parse_v4(&info.postman_id) {
        report.push(ValidationIssue::error(
            "collection/info",
            format!("_postman_id: {e}"),
        ));
    }
    if collection.item.is_empty() {
        report.push(ValidationIssue::error("collection", "no items"));
    }
}

fn check_request(
    path: &str,
    item: &PostmanItem,
    environment: &PostmanEnvironment,
    report: &mut ValidationReport,
) {
    let Some(request) = &item.request else {
        return;
    };

    if !request.url.is_consistent() {
        report.push(ValidationIssue::error(
            path,
            format!(
                "url.raw `{}` does not match host/path `{}`",
                request.url.raw,
                request.url.reconstruct()
            ),
        ));
    }

    check_placeholders(path, &request.url.raw, environment, report);
    if let Some(raw) = request.body.as_ref().and_then(|b| b.raw.as_deref()) {
        check_placeholders(path, raw, environment, report);
    }
    for header in &request.header {
        check_placeholders(path, &header.value, environment, report);
    }
}

fn check_placeholders(
    path: &str,
    text: &str,
    environment: &PostmanEnvironment,
    report: &mut ValidationReport,
) {
    for reference in parse_variables(text) {
        if reference.is_dynamic || environment.defines(&reference.name) {
            continue;
        }
        report.push(ValidationIssue::error(
            path,
            format!(
                "`{{{{{}}}}}` is not defined in environment `{}`",
                reference.name, environment.name
            ),
        ));
    }
}

/// Requests under `/auth/` normally run before a token exists, so inheriting
/// the collection bearer auth is suspicious.
fn check_auth_endpoint(path: &str, item: &PostmanItem, report: &mut ValidationReport) {
    let Some(request) = &item.request else {
        return;
    };
    let is_auth_endpoint = request.url.path.first().is_some_and(|p| p == "auth");
    if is_auth_endpoint && request.auth.is_none() {
        report.push(ValidationIssue::warning(
            path,
            format!(
                "{} {} inherits the collection bearer auth; consider `noauth`",
                request.method, request.url.raw
            ),
        ));
    }
}

fn item_path(folder: &str, item: &PostmanItem) -> String {
    if folder.is_empty() {
        format!("collection/{}", item.name)
    } else {
        format!("collection/{folder}/{}", item.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::builder::{build_collection, build_environment};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn documents() -> (PostmanCollection, PostmanEnvironment) {
        (build_collection(), build_environment(Utc::now()))
    }

    fn request_mut<'a>(
        collection: &'a mut PostmanCollection,
        name: &str,
    ) -> &'a mut PostmanItem {
        collection
            .item
            .iter_mut()
            .flat_map(|folder| folder.item.as_mut().unwrap().iter_mut())
            .find(|item| item.name == name)
            .unwrap()
    }

    #[test]
    fn test_generated_documents_are_valid() {
        let (collection, environment) = documents();
        let report = validate_documents(&collection, &environment);
        assert!(report.is_valid(), "{:?}", report.issues);
    }

    #[test]
    fn test_register_auth_is_flagged_as_warning() {
        let (collection, environment) = documents();
        let report = validate_documents(&collection, &environment);
        let warnings: Vec<&ValidationIssue> = report.warnings().collect();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "collection/🔐 인증 관리/회원가입");
        assert!(warnings[0].message.contains("/auth/register"));
    }

    #[test]
    fn test_every_placeholder_is_an_environment_key() {
        let (collection, environment) = documents();
        for (_, item) in collection.requests() {
            let request = item.request.as_ref().unwrap();
            let mut texts = vec![request.url.raw.as_str()];
            if let Some(raw) = request.body.as_ref().and_then(|b| b.raw.as_deref()) {
                texts.push(raw);
            }
            for text in texts {
                for reference in parse_variables(text) {
                    assert!(environment.defines(&reference.name), "{}", reference.name);
                }
            }
        }
    }

    #[test]
    fn test_undefined_placeholder_is_an_error() {
        let (mut collection, environment) = documents();
        let item = request_mut(&mut collection, "토큰 갱신");
        item.request.as_mut().unwrap().body.as_mut().unwrap().raw =
            Some("{\"refreshToken\": \"{{session_token}}\"}".to_string());

        let report = validate_documents(&collection, &environment);
        let errors: Vec<&ValidationIssue> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("{{session_token}}"));
        assert!(errors[0].message.contains("Spring Boot Base Template"));
    }

    #[test]
    fn test_dynamic_placeholders_are_allowed() {
        let (mut collection, environment) = documents();
        let item = request_mut(&mut collection, "내 정보 수정");
        item.request.as_mut().unwrap().body.as_mut().unwrap().raw =
            Some("{\"name\": \"{{$randomFirstName}}\"}".to_string());

        assert!(validate_documents(&collection, &environment).is_valid());
    }

    #[test]
    fn test_url_mismatch_is_an_error() {
        let (mut collection, environment) = documents();
        let item = request_mut(&mut collection, "로그인");
        item.request.as_mut().unwrap().url.raw = "{{base_url}}/auth/signin".to_string();

        let report = validate_documents(&collection, &environment);
        assert!(!report.is_valid());
        assert!(report.errors().any(|e| e.path.ends_with("로그인")));
    }

    #[test]
    fn test_missing_environment_key_is_an_error() {
        let (collection, mut environment) = documents();
        environment.values.retain(|v| v.key != "baseUrl");

        let report = validate_documents(&collection, &environment);
        // Both health checks use {{baseUrl}}.
        assert_eq!(report.errors().count(), 2);
    }

    #[test]
    fn test_bad_info_block() {
        let (mut collection, environment) = documents();
        collection.info.postman_id = "collection-1".to_string();
        collection.info.schema =
            "https://schema.getpostman.com/json/collection/v2.0.0/collection.json".to_string();

        let report = validate_documents(&collection, &environment);
        assert_eq!(report.errors().count(), 2);
    }

    #[test]
    fn test_no_auth_warning_without_collection_bearer() {
        let (mut collection, environment) = documents();
        collection.auth = None;
        let report = validate_documents(&collection, &environment);
        assert_eq!(report.warnings().count(), 0);
    }
}
