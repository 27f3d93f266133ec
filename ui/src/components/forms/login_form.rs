//! Client-side credential form bound to the remote authentication endpoint

use dioxus::prelude::*;

use crate::components::{
    display::{AlertBanner, AlertSeverity, LoadingIndicator},
    input::{InputType, ValidatedInput},
};
use crate::features::auth::{LoginAction, LoginState};
use crate::services::client::AuthSession;
use crate::services::config::AuthConfig;

#[cfg(feature = "web")]
use crate::features::auth::{
    failure_message,
    storage::{persist_session, BrowserSessionStore},
    MSG_LOGIN_FAILED, MSG_LOGIN_SUCCESS,
};
#[cfg(feature = "web")]
use crate::services::client::{AuthClient, LoginRequest};
#[cfg(feature = "web")]
use crate::{console_error, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormComponentProps {
    pub state: Signal<LoginState>,
    pub dispatch: EventHandler<LoginAction>,
    pub config: AuthConfig,
    /// Post-login follow-up supplied by the caller; no navigation happens here
    pub on_authenticated: EventHandler<AuthSession>,
}

#[cfg(feature = "web")]
#[component]
pub fn LoginFormComponent(props: LoginFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = props.config.clone();
    let on_authenticated = props.on_authenticated;

    let password_input_type = if state().show_password {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: move |event| {
                event.prevent_default();

                let current_state = state();
                if !current_state.can_submit() {
                    return;
                }

                let request = LoginRequest {
                    username: current_state.form.username.clone(),
                    password: current_state.form.password.clone(),
                };
                let config = config.clone();

                dispatch.call(LoginAction::SubmitStarted);

                // The task is owned by this component's scope: unmounting the
                // form drops it, so a late response cannot touch dead state.
                spawn(async move {
                    let client = AuthClient::new(config);
                    match client.login(&request).await {
                        Ok(response) if response.success => {
                            if let Some(session) = response.session {
                                match persist_session(&BrowserSessionStore, &session) {
                                    Ok(()) => {
                                        console_info!("Login successful - session stored in localStorage");
                                        dispatch.call(LoginAction::SubmitSucceeded(
                                            MSG_LOGIN_SUCCESS.to_string(),
                                        ));
                                        on_authenticated.call(session);
                                    }
                                    Err(e) => {
                                        console_error!("Failed to store session: {}", e);
                                        dispatch.call(LoginAction::SubmitFailed(format!(
                                            "Failed to store session: {}",
                                            e
                                        )));
                                    }
                                }
                            } else {
                                console_error!("Login accepted but no session returned");
                                dispatch.call(LoginAction::SubmitFailed(
                                    MSG_LOGIN_FAILED.to_string(),
                                ));
                            }
                        }
                        Ok(response) => {
                            dispatch.call(LoginAction::SubmitFailed(
                                response.message.unwrap_or_else(|| MSG_LOGIN_FAILED.to_string()),
                            ));
                        }
                        Err(e) => {
                            console_error!("Login request failed: {}", e);
                            dispatch.call(LoginAction::SubmitFailed(failure_message(&e)));
                        }
                    }
                });
            },

            // Alert Region
            if let Some(message) = state().status.error_message() {
                AlertBanner {
                    severity: AlertSeverity::Error,
                    message: message.to_string()
                }
            }
            if let Some(message) = state().status.success_message() {
                AlertBanner {
                    severity: AlertSeverity::Success,
                    message: message.to_string()
                }
            }

            // Username Input Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    span { class: "input-icon", "👤" }
                    "Username"
                }
                ValidatedInput {
                    value: state().form.username,
                    placeholder: "Enter your username".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    required: true,
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(LoginAction::SetUsername(data));
                    }
                }
            }

            // Password Input Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    span { class: "input-icon", "🔑" }
                    "Contraseña"
                }
                div {
                    class: "password-field",
                    ValidatedInput {
                        value: state().form.password,
                        placeholder: "Enter your password".to_string(),
                        input_type: password_input_type,
                        input_class: "input-field".to_string(),
                        required: true,
                        disabled: false,
                        on_change: move |data: String| {
                            dispatch.call(LoginAction::SetPassword(data));
                        }
                    }
                    button {
                        r#type: "button",
                        class: "toggle-visibility",
                        aria_label: "Toggle password visibility",
                        onclick: move |_| dispatch.call(LoginAction::ToggleShowPassword),
                        if state().show_password { "🙈" } else { "👁" }
                    }
                }
            }

            // Non-functional affordance, kept from the reference design
            div {
                class: "forgot-password",
                span { "Forgot Password?" }
            }

            // Submit Button
            div {
                class: "button-section",
                button {
                    r#type: "submit",
                    class: "login-button",
                    disabled: state().status.is_loading(),
                    if state().status.is_loading() {
                        LoadingIndicator { message: "Ingresando...".to_string() }
                    } else {
                        "Login"
                    }
                }
            }
        }
    }
}

// Fallback for when the web feature is disabled
#[cfg(not(feature = "web"))]
#[component]
pub fn LoginFormComponent(_props: LoginFormComponentProps) -> Element {
    rsx! {
        div {
            class: "login-form",
            p {
                "The login form is not available. Please enable the 'web' feature."
            }
        }
    }
}
