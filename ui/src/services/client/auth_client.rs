use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::*;
use crate::services::config::AuthConfig;

/// Client for the remote authentication endpoint
#[derive(Clone)]
pub struct AuthClient {
    http_client: Client,
    config: AuthConfig,
}

impl AuthClient {
    /// Create a new auth client for the configured endpoint
    pub fn new(config: AuthConfig) -> Self {
        Self {
            http_client: {
                Client::builder()
                    .user_agent("sac-login-ui/1.0")
                    .build()
                    .expect("Failed to create HTTP client")
            },
            config,
        }
    }

    /// Submits credentials and maps the response onto a login outcome.
    ///
    /// A non-2xx answer is a rejected `LoginResponse`, not an `Err`; only
    /// transport and malformed-payload failures surface as `ClientError`.
    #[instrument(skip(self, request), err)]
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let login_url = self.config.login_url();
        info!("Submitting credentials to {}", login_url);

        let response = self
            .http_client
            .post(&login_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to call login endpoint: {}", e),
            })?;

        let status = response.status();
        if status.is_success() {
            let body: serde_json::Value =
                response
                    .json()
                    .await
                    .map_err(|e| ClientError::Serialization {
                        message: format!("Failed to parse response: {}", e),
                    })?;

            let session = parse_success_body(&body)?;
            info!("Login accepted for identifier: {}", request.username);
            Ok(LoginResponse::success(session))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));

            error!("Login failed with status {}: {}", status, error_text);
            Ok(LoginResponse::rejected(error_message_from_body(&error_text)))
        }
    }
}

/// Extracts the session from a 2xx body: a string `token` plus a `user`
/// profile value.
pub(crate) fn parse_success_body(body: &serde_json::Value) -> ClientResult<AuthSession> {
    let token = body["token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClientError::InvalidResponse {
            expected: "string 'token' field".to_string(),
            got: body["token"].to_string(),
        })?;

    let user = body
        .get("user")
        .cloned()
        .ok_or_else(|| ClientError::InvalidResponse {
            expected: "'user' field".to_string(),
            got: "missing field".to_string(),
        })?;

    Ok(AuthSession { token, user })
}

/// Server-supplied message from a non-2xx body, when the body is JSON and
/// carries a string `error` field.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_body() {
        let body = json!({"token": "abc", "user": {"id": 1}});
        let session = parse_success_body(&body).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user, json!({"id": 1}));
    }

    #[test]
    fn test_parse_success_body_missing_token() {
        let body = json!({"user": {"id": 1}});
        let err = parse_success_body(&body).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { .. }));
    }

    #[test]
    fn test_parse_success_body_non_string_token() {
        let body = json!({"token": 42, "user": {"id": 1}});
        let err = parse_success_body(&body).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { .. }));
    }

    #[test]
    fn test_parse_success_body_missing_user() {
        let body = json!({"token": "abc"});
        let err = parse_success_body(&body).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { .. }));
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message_from_body(r#"{"error":"bad credentials"}"#),
            Some("bad credentials".to_string())
        );

        // Empty body, non-JSON body, missing field, non-string field: all fall
        // back to no server message
        assert_eq!(error_message_from_body(""), None);
        assert_eq!(error_message_from_body("<html>teapot</html>"), None);
        assert_eq!(error_message_from_body("{}"), None);
        assert_eq!(error_message_from_body(r#"{"error":{"code":401}}"#), None);
    }

    #[test]
    fn test_login_response_constructors() {
        let session = AuthSession {
            token: "abc".to_string(),
            user: json!({"id": 1}),
        };
        let ok = LoginResponse::success(session.clone());
        assert!(ok.success);
        assert_eq!(ok.message, None);
        assert_eq!(ok.session, Some(session));

        let rejected = LoginResponse::rejected(Some("bad credentials".to_string()));
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("bad credentials"));
        assert_eq!(rejected.session, None);
    }
}
