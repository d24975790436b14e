//! Collection Builder.

use postman_template_domain::postman::{
    COLLECTION_SCHEMA_V21, PostmanAuth, PostmanCollection, PostmanInfo, PostmanItem,
    PostmanRequest, PostmanUrl,
};
use postman_template_domain::scripts::{auto_login_event, login_capture_event};
use postman_template_domain::{TemplateProfile, generate_id};
use serde_json::json;

/// Placeholder for the API root (`/api/v1` included).
pub const API_HOST: &str = "{{base_url}}";
/// Placeholder for the bare server root, used by health checks.
pub const SERVER_HOST: &str = "{{baseUrl}}";

const DESCRIPTION: &str = "BMOA 기반 Spring Boot 템플릿 프로젝트 API 컬렉션

## 자동화 기능
- 로그인 시 자동으로 JWT 토큰 저장
- 토큰 만료 시 자동 재로그인
- 모든 인증 필요 API에 자동 토큰 첨부";

const TEST_USER_NAME: &str = "테스트 사용자";

/// Builds the collection for the default profile.
#[must_use]
pub fn build_collection() -> PostmanCollection {
    build_collection_with(&TemplateProfile::default())
}

/// Builds the collection for `profile`.
///
/// Every call draws a new `_postman_id`; everything else is a pure function
/// of the profile.
#[must_use]
pub fn build_collection_with(profile: &TemplateProfile) -> PostmanCollection {
    PostmanCollection {
        info: PostmanInfo {
            name: profile.collection_name.clone(),
            description: Some(DESCRIPTION.to_string()),
            schema: COLLECTION_SCHEMA_V21.to_string(),
            postman_id: generate_id(),
        },
        auth: Some(PostmanAuth::bearer("{{access_token}}")),
        event: vec![auto_login_event()],
        item: vec![
            auth_folder(profile),
            user_folder(),
            health_folder(),
        ],
    }
}

fn auth_folder(profile: &TemplateProfile) -> PostmanItem {
    // Register still inherits the collection bearer auth; validation flags it.
    let register = PostmanRequest::new("POST", api_url(&["auth", "register"]))
        .with_json_body(&json!({
            "email": profile.test_email,
            "password": profile.test_password,
            "name": TEST_USER_NAME,
            "role": "USER",
        }))
        .with_description("새로운 사용자 계정을 생성합니다.");

    let login = PostmanRequest::new("POST", api_url(&["auth", "login"]))
        .with_auth(PostmanAuth::noauth())
        .with_json_body(&json!({
            "email": "{{test_email}}",
            "password": "{{test_password}}",
        }))
        .with_description("이메일과 비밀번호로 로그인하여 JWT 토큰을 발급받습니다.");

    let refresh = PostmanRequest::new("POST", api_url(&["auth", "refresh"]))
        .with_auth(PostmanAuth::noauth())
        .with_json_body(&json!({ "refreshToken": "{{refresh_token}}" }))
        .with_description("Refresh Token을 사용하여 새로운 Access Token을 발급받습니다.");

    PostmanItem::folder(
        "🔐 인증 관리",
        vec![
            PostmanItem::request("회원가입", register),
            PostmanItem::request("로그인", login).with_event(login_capture_event()),
            PostmanItem::request("토큰 갱신", refresh),
        ],
    )
}

fn user_folder() -> PostmanItem {
    let me = PostmanRequest::new("GET", api_url(&["user", "me"]))
        .with_description("현재 로그인한 사용자의 정보를 조회합니다.");

    let update = PostmanRequest::new("PUT", api_url(&["user", "me"]))
        .with_json_body(&json!({ "name": "수정된 이름" }))
        .with_description("현재 로그인한 사용자의 정보를 수정합니다.");

    PostmanItem::folder(
        "👤 사용자 관리",
        vec![
            PostmanItem::request("내 정보 조회", me),
            PostmanItem::request("내 정보 수정", update),
        ],
    )
}

fn health_folder() -> PostmanItem {
    let health = PostmanRequest::new("GET", server_url(&["health"]))
        .with_auth(PostmanAuth::noauth())
        .with_description("서버의 상태를 확인합니다. (인증 불필요)");

    let actuator = PostmanRequest::new("GET", server_url(&["actuator", "health"]))
        .with_auth(PostmanAuth::noauth())
        .with_description("Spring Boot Actuator 헬스체크를 확인합니다.");

    PostmanItem::folder(
        "🏥 헬스체크",
        vec![
            PostmanItem::request("서버 상태 확인", health),
            PostmanItem::request("Actuator Health", actuator),
        ],
    )
}

fn api_url(path: &[&str]) -> PostmanUrl {
    PostmanUrl::from_segments(API_HOST, path)
}

fn server_url(path: &[&str]) -> PostmanUrl {
    PostmanUrl::from_segments(SERVER_HOST, path)
}
