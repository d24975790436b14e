//! Environment Builder.

use chrono::{DateTime, Utc};
use postman_template_domain::TemplateProfile;
use postman_template_domain::postman::{PostmanEnvVariable, PostmanEnvironment};
use postman_template_domain::scripts::{ACCESS_TOKEN_VAR, REFRESH_TOKEN_VAR};

/// Value of `_postman_exported_using`.
pub const EXPORTED_USING: &str = concat!("postman-template/", env!("CARGO_PKG_VERSION"));

/// Builds the environment for the default profile.
#[must_use]
pub fn build_environment(exported_at: DateTime<Utc>) -> PostmanEnvironment {
    build_environment_with(&TemplateProfile::default(), exported_at)
}

/// Builds the environment for `profile`.
///
/// Token values stay empty; the collection scripts fill them in at run time.
#[must_use]
pub fn build_environment_with(
    profile: &TemplateProfile,
    exported_at: DateTime<Utc>,
) -> PostmanEnvironment {
    PostmanEnvironment::new(profile.environment_name.clone())
        .with_variable(PostmanEnvVariable::plain(
            "base_url",
            profile.api_base_url.clone(),
            "템플릿 API 베이스 URL",
        ))
        .with_variable(PostmanEnvVariable::plain(
            "baseUrl",
            profile.server_url.clone(),
            "서버 베이스 URL",
        ))
        .with_variable(PostmanEnvVariable::secret(
            ACCESS_TOKEN_VAR,
            "",
            "JWT Access Token (자동 설정됨)",
        ))
        .with_variable(PostmanEnvVariable::secret(
            REFRESH_TOKEN_VAR,
            "",
            "JWT Refresh Token (자동 설정됨)",
        ))
        .with_variable(PostmanEnvVariable::plain(
            "test_email",
            profile.test_email.clone(),
            "테스트용 이메일",
        ))
        .with_variable(PostmanEnvVariable::secret(
            "test_password",
            profile.test_password.clone(),
            "테스트용 비밀번호",
        ))
        .exported(exported_at, EXPORTED_USING)
}
