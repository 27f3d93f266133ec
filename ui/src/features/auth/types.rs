// Core types for the login screen - no dioxus imports needed here

use crate::services::client::ClientError;

/// Fixed user-facing copy, matching the product's localized strings.
pub const MSG_LOGIN_SUCCESS: &str = "Login exitoso!";
pub const MSG_LOGIN_FAILED: &str = "Error en el login";
pub const MSG_CONNECTION_FAILED: &str =
    "Error de conexión. Verifica que el servidor esté ejecutándose.";

/// Current values of the two credential inputs.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CredentialForm {
    pub username: String,
    pub password: String,
}

/// Submission lifecycle shown to the user. At most one of the error/success
/// messages is populated at a time.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

impl SubmitStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Success(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum LoginAction {
    SetUsername(String),
    SetPassword(String),
    ToggleShowPassword,
    SubmitStarted,
    SubmitSucceeded(String),
    SubmitFailed(String),
}

/// Consolidated state for the login screen.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginState {
    pub form: CredentialForm,
    pub show_password: bool,
    pub status: SubmitStatus,
}

impl LoginState {
    /// In-place reduction to preserve Dioxus Signal reactivity.
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetUsername(username) => {
                self.form.username = username;
                self.clear_error();
            }
            LoginAction::SetPassword(password) => {
                self.form.password = password;
                self.clear_error();
            }
            LoginAction::ToggleShowPassword => {
                self.show_password = !self.show_password;
            }
            LoginAction::SubmitStarted => {
                // Entering Loading drops any prior error/success message
                self.status = SubmitStatus::Loading;
            }
            LoginAction::SubmitSucceeded(message) => {
                self.status = SubmitStatus::Success(message);
            }
            LoginAction::SubmitFailed(message) => {
                self.status = SubmitStatus::Error(message);
            }
        }
    }

    /// Exactly one outstanding request per form instance.
    pub fn can_submit(&self) -> bool {
        !self.status.is_loading()
    }

    // An edit after a failed attempt dismisses the error; a success message
    // survives further edits.
    fn clear_error(&mut self) {
        if matches!(self.status, SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Maps a client error onto the fixed user-facing copy. Only transport
/// failures get the connectivity message; in every other case the server
/// did answer.
pub fn failure_message(error: &ClientError) -> String {
    match error {
        ClientError::Network { .. } => MSG_CONNECTION_FAILED.to_string(),
        _ => MSG_LOGIN_FAILED.to_string(),
    }
}
