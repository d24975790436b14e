//! Integration tests for a full generation run
//!
//! These tests drive the real file store and, for the last group, the
//! compiled binary, then inspect what landed on disk.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::tempdir;

use postman_template_application::GenerateTemplateFiles;
use postman_template_application::variables::parse_variables;
use postman_template_domain::TemplateProfile;
use postman_template_infrastructure::{
    COLLECTION_FILE_NAME, ENVIRONMENT_FILE_NAME, FileDocumentStore, SystemClock, to_json_stable,
    validate_json,
};

fn generate(dir: &Path) {
    let use_case = GenerateTemplateFiles::new(FileDocumentStore::new(dir), SystemClock::new());
    use_case
        .execute(&TemplateProfile::default())
        .expect("generation should succeed");
}

fn read_json(path: &Path) -> Value {
    validate_json(&fs::read_to_string(path).expect("file should exist")).expect("valid JSON")
}

fn requests(collection: &Value) -> Vec<&Value> {
    collection["item"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|folder| folder["item"].as_array().unwrap())
        .collect()
}

fn request_named<'a>(collection: &'a Value, name: &str) -> &'a Value {
    requests(collection)
        .into_iter()
        .find(|r| r["name"] == name)
        .unwrap_or_else(|| panic!("request {name} missing"))
}

#[test]
fn test_collection_has_required_top_level_keys() {
    let dir = tempdir().expect("Failed to create temp directory");
    generate(dir.path());

    let collection = read_json(&dir.path().join(COLLECTION_FILE_NAME));
    assert!(collection.get("info").is_some());
    assert!(collection.get("item").is_some());
    assert_eq!(
        collection["info"]["schema"],
        "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
    );
}

#[test]
fn test_collection_file_roundtrips_byte_identically() {
    let dir = tempdir().unwrap();
    generate(dir.path());

    let written = fs::read_to_string(dir.path().join(COLLECTION_FILE_NAME)).unwrap();
    let reparsed = validate_json(&written).unwrap();
    assert_eq!(to_json_stable(&reparsed).unwrap(), written);
}

#[test]
fn test_two_runs_differ_only_in_postman_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(COLLECTION_FILE_NAME);

    generate(dir.path());
    let mut first = read_json(&path);
    generate(dir.path());
    let second = read_json(&path);

    let first_id = first["info"]["_postman_id"].as_str().unwrap().to_string();
    let second_id = second["info"]["_postman_id"].as_str().unwrap();
    assert_ne!(first_id, second_id);
    assert!(postman_template_domain::parse_v4(second_id).is_ok());

    first["info"]["_postman_id"] = second["info"]["_postman_id"].clone();
    assert_eq!(first, second);
}

#[test]
fn test_placeholders_resolve_against_environment() {
    let dir = tempdir().unwrap();
    generate(dir.path());

    let collection = read_json(&dir.path().join(COLLECTION_FILE_NAME));
    let environment = read_json(&dir.path().join(ENVIRONMENT_FILE_NAME));
    let keys: Vec<&str> = environment["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["key"].as_str().unwrap())
        .collect();

    for request in requests(&collection) {
        let raw_url = request["request"]["url"]["raw"].as_str().unwrap();
        let body = request["request"]["body"]["raw"].as_str().unwrap_or_default();
        for text in [raw_url, body] {
            for reference in parse_variables(text) {
                assert!(
                    keys.contains(&reference.name.as_str()),
                    "{} uses undefined {{{{{}}}}}",
                    request["name"],
                    reference.name
                );
            }
        }
    }
}

#[test]
fn test_login_url_reconstructs_from_segments() {
    let dir = tempdir().unwrap();
    generate(dir.path());

    let collection = read_json(&dir.path().join(COLLECTION_FILE_NAME));
    let url = &request_named(&collection, "로그인")["request"]["url"];
    assert_eq!(url["raw"], "{{base_url}}/auth/login");

    let host: Vec<&str> = url["host"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    let path: Vec<&str> = url["path"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(format!("{}/{}", host.join("."), path.join("/")), "{{base_url}}/auth/login");
}

#[test]
fn test_token_variables_are_empty_secrets() {
    let dir = tempdir().unwrap();
    generate(dir.path());

    let environment = read_json(&dir.path().join(ENVIRONMENT_FILE_NAME));
    for key in ["access_token", "refresh_token"] {
        let var = environment["values"]
            .as_array()
            .unwrap()
            .iter()
            .find(|v| v["key"] == key)
            .unwrap();
        assert_eq!(var["value"], "");
        assert_eq!(var["type"], "secret");
    }
}

#[test]
fn test_health_check_is_exempt_from_bearer() {
    let dir = tempdir().unwrap();
    generate(dir.path());

    let collection = read_json(&dir.path().join(COLLECTION_FILE_NAME));
    assert_eq!(collection["auth"]["type"], "bearer");
    let health = request_named(&collection, "서버 상태 확인");
    assert_eq!(health["request"]["auth"]["type"], "noauth");
}

#[test]
fn test_binary_writes_files_to_output_dir() {
    let dir = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_postman-template"))
        .env("POSTMAN_TEMPLATE_OUTPUT_DIR", dir.path())
        .env("RUST_LOG", "warn")
        .output()
        .expect("binary should start");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(COLLECTION_FILE_NAME));
    assert!(stdout.contains(ENVIRONMENT_FILE_NAME));
    assert!(dir.path().join(COLLECTION_FILE_NAME).is_file());
    assert!(dir.path().join(ENVIRONMENT_FILE_NAME).is_file());
}

#[test]
fn test_binary_fails_on_invalid_configuration() {
    let dir = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_postman-template"))
        .env("POSTMAN_TEMPLATE_OUTPUT_DIR", dir.path())
        .env("POSTMAN_TEMPLATE_BASE_URL", "not-a-url")
        .output()
        .expect("binary should start");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("api_base_url"));
    assert!(!dir.path().join(COLLECTION_FILE_NAME).exists());
}
