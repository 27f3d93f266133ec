//! Configuration for the login screen's outbound requests.

use serde::{Deserialize, Serialize};

/// Where the authentication endpoint lives. Supplied at construction so the
/// target is never a compiled-in constant inside the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Scheme + host (+ optional port) of the API server
    pub base_url: String,
    /// Path of the login endpoint on that server
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            login_path: "/api/login/".to_string(),
        }
    }
}

impl AuthConfig {
    /// Configuration pointing at a different API server, default login path
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the login endpoint
    pub fn login_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.login_path.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("base_url must be http(s), got: {}", self.base_url));
        }
        if self.login_path.trim().is_empty() {
            return Err("login_path must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_login_url() {
        assert_eq!(
            AuthConfig::default().login_url(),
            "http://localhost:8000/api/login/"
        );
    }

    #[test]
    fn test_login_url_joins_slashes() {
        let config = AuthConfig {
            base_url: "https://api.example.com/".to_string(),
            login_path: "/api/login/".to_string(),
        };
        assert_eq!(config.login_url(), "https://api.example.com/api/login/");

        let config = AuthConfig {
            base_url: "https://api.example.com".to_string(),
            login_path: "api/login/".to_string(),
        };
        assert_eq!(config.login_url(), "https://api.example.com/api/login/");
    }

    #[test]
    fn test_validate() {
        assert!(AuthConfig::default().validate().is_ok());
        assert!(AuthConfig::new("https://api.example.com").validate().is_ok());

        assert!(AuthConfig::new("").validate().is_err());
        assert!(AuthConfig::new("ftp://api.example.com").validate().is_err());

        let config = AuthConfig {
            base_url: "http://localhost:8000".to_string(),
            login_path: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
