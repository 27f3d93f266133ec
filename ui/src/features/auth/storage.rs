use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::services::client::AuthSession;

/// Local storage keys written on successful login. Write-only from this
/// screen; nothing in scope ever reads or clears them.
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionStoreError {
    #[error("storage write failed for '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("could not serialize user profile: {message}")]
    Serialization { message: String },
}

/// Injected key-value capability so the submission flow stays testable
/// outside a browser.
pub trait SessionStore {
    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;
}

/// Browser-backed store writing through the raw storage handle. The typed
/// gloo `set` would JSON-quote the token; the token must land verbatim.
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let storage: web_sys::Storage = LocalStorage::raw();
        storage
            .set_item(key, value)
            .map_err(|err: JsValue| SessionStoreError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", err),
            })
    }
}

/// Persists the auth token and the JSON-serialized user profile under the
/// fixed keys.
pub fn persist_session(
    store: &dyn SessionStore,
    session: &AuthSession,
) -> Result<(), SessionStoreError> {
    store.set(AUTH_TOKEN_KEY, &session.token)?;
    let user_json =
        serde_json::to_string(&session.user).map_err(|err| SessionStoreError::Serialization {
            message: err.to_string(),
        })?;
    store.set(USER_KEY, &user_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemorySessionStore {
        entries: RefCell<HashMap<String, String>>,
        fail: bool,
    }

    impl SessionStore for MemorySessionStore {
        fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
            if self.fail {
                return Err(SessionStoreError::WriteFailed {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_persist_session_writes_fixed_keys() {
        let store = MemorySessionStore::default();
        let session = AuthSession {
            token: "abc".to_string(),
            user: json!({"id": 1}),
        };

        persist_session(&store, &session).unwrap();

        let entries = store.entries.borrow();
        // Token is stored raw, never JSON-quoted
        assert_eq!(entries.get(AUTH_TOKEN_KEY).map(String::as_str), Some("abc"));
        assert_eq!(
            entries.get(USER_KEY).map(String::as_str),
            Some(r#"{"id":1}"#)
        );
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_persist_session_surfaces_write_failure() {
        let store = MemorySessionStore {
            fail: true,
            ..Default::default()
        };
        let session = AuthSession {
            token: "abc".to_string(),
            user: json!({"id": 1}),
        };

        let err = persist_session(&store, &session).unwrap_err();
        assert!(
            matches!(err, SessionStoreError::WriteFailed { ref key, .. } if key == AUTH_TOKEN_KEY)
        );
    }
}
