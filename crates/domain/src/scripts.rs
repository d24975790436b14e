//! Client-side scripts embedded in the collection.
//!
//! These run inside Postman's sandbox, never here. They are kept as opaque
//! text and only split into lines for the `exec` array.

use crate::postman::{PostmanEvent, PostmanScript, ScriptListen};

/// Environment key holding the access token.
pub const ACCESS_TOKEN_VAR: &str = "access_token";
/// Environment key holding the refresh token.
pub const REFRESH_TOKEN_VAR: &str = "refresh_token";

/// Test script attached to the login request.
///
/// On a 200 response shaped `{ success, data: { accessToken, refreshToken? } }`
/// stores both tokens in the active environment. Parse errors are logged.
pub const LOGIN_CAPTURE_SCRIPT: &str = r"// 응답 상태 코드 검증
pm.test('응답 상태 코드가 200인지 확인', function () {
    pm.response.to.have.status(200);
});

if (pm.response.code === 200) {
    try {
        const body = pm.response.json();

        // CommonResponse: { success, data }
        if (body.success && body.data) {
            const tokens = body.data;

            if (tokens.accessToken) {
                pm.environment.set('access_token', tokens.accessToken);
                console.log('✅ Access Token 저장됨');
            }

            if (tokens.refreshToken) {
                pm.environment.set('refresh_token', tokens.refreshToken);
                console.log('✅ Refresh Token 저장됨');
            }
        }
    } catch (e) {
        console.error('❌ 응답 파싱 중 오류:', e);
    }
}";

/// Collection-level pre-request script.
///
/// Decodes the JWT payload of `access_token`, and when the token is missing,
/// undecodable or past its `exp`, logs in again with `test_email` /
/// `test_password` (falling back to the template account) before the request
/// is sent. A payload without `exp` counts as unexpired. Failures are logged and never abort the request.
pub const AUTO_LOGIN_SCRIPT: &str = r"// JWT 만료 여부 확인
function isTokenExpired(token) {
    if (!token) return true;
    try {
        const payload = JSON.parse(atob(token.split('.')[1]));
        const now = Math.floor(Date.now() / 1000);
        return payload.exp < now;
    } catch (e) {
        return true;
    }
}

const currentToken = pm.environment.get('access_token');

if (!currentToken || isTokenExpired(currentToken)) {
    console.log('🔄 토큰이 없거나 만료됨. 자동 로그인 시도...');

    const loginRequest = {
        url: pm.environment.get('base_url') + '/auth/login',
        method: 'POST',
        header: {
            'Content-Type': 'application/json'
        },
        body: {
            mode: 'raw',
            raw: JSON.stringify({
                email: pm.environment.get('test_email') || 'test@template.com',
                password: pm.environment.get('test_password') || 'test1234'
            })
        }
    };

    pm.sendRequest(loginRequest, function (err, response) {
        if (err) {
            console.error('❌ 자동 로그인 실패:', err);
            return;
        }

        if (response.code !== 200) {
            console.error('❌ 로그인 실패. 상태코드:', response.code);
            return;
        }

        try {
            const body = response.json();
            if (body.success && body.data && body.data.accessToken) {
                pm.environment.set('access_token', body.data.accessToken);
                if (body.data.refreshToken) {
                    pm.environment.set('refresh_token', body.data.refreshToken);
                }
                console.log('✅ 자동 로그인 성공');
            } else {
                console.error('❌ 로그인 응답 형식 오류');
            }
        } catch (e) {
            console.error('❌ 로그인 응답 파싱 오류:', e);
        }
    });
} else {
    console.log('✅ 기존 JWT 토큰 사용 중');
}";

/// Test event that captures tokens from a login response.
#[must_use]
pub fn login_capture_event() -> PostmanEvent {
    PostmanEvent {
        listen: ScriptListen::Test,
        script: PostmanScript::javascript(LOGIN_CAPTURE_SCRIPT),
    }
}

/// Pre-request event that refreshes an expired or missing token.
#[must_use]
pub fn auto_login_event() -> PostmanEvent {
    PostmanEvent {
        listen: ScriptListen::Prerequest,
        script: PostmanScript::javascript(AUTO_LOGIN_SCRIPT),
    }
}
