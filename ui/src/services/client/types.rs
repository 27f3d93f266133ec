use serde::{Deserialize, Serialize};

/// JSON body sent to the authentication endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Credentials returned by the endpoint on success: an opaque token plus an
/// arbitrary user-profile object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: serde_json::Value,
}

/// Outcome of one login attempt, as far as the server is concerned.
/// Transport failures never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    /// Server-supplied error message, when the body carried one
    pub message: Option<String>,
    pub session: Option<AuthSession>,
}

impl LoginResponse {
    /// Create a successful login response
    pub fn success(session: AuthSession) -> Self {
        Self {
            success: true,
            message: None,
            session: Some(session),
        }
    }

    /// Create a rejected login response
    pub fn rejected(message: Option<String>) -> Self {
        Self {
            success: false,
            message,
            session: None,
        }
    }
}
