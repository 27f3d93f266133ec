use dioxus::prelude::*;

use crate::components::forms::LoginFormComponent;
use crate::features::auth::{LoginAction, LoginState};
use crate::services::client::AuthSession;
use crate::services::config::AuthConfig;
use crate::{console_info, console_warn};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[derive(Props, PartialEq, Clone)]
pub struct LoginPageProps {
    /// Endpoint configuration; defaults to the local development server
    #[props(default)]
    pub config: AuthConfig,
    /// Post-login follow-up wired in by the caller. Navigation never happens
    /// here; without a handler the page stays on the login screen.
    pub on_authenticated: Option<EventHandler<AuthSession>>,
}

#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    // Consolidated state management
    let mut state = use_signal(LoginState::default);

    // Surface a misconfigured endpoint early
    let config = props.config.clone();
    use_effect(move || {
        if let Err(e) = config.validate() {
            console_warn!("[Login] Invalid auth configuration: {}", e);
        }
    });

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let follow_up = props.on_authenticated;
    let on_authenticated = EventHandler::new(move |session: AuthSession| match follow_up {
        Some(handler) => handler.call(session),
        None => {
            console_info!("[Login] Authenticated - no post-login destination configured");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }

        div {
            class: "login-container",

            div {
                class: "brand-panel",
                div {
                    class: "brand-mark",
                    div { class: "brand-mark-inner" }
                }
                h1 {
                    class: "brand-title",
                    "SAC"
                }
            }

            div {
                class: "form-panel",
                div {
                    class: "form-card",
                    h2 {
                        class: "form-title",
                        "Login"
                    }
                    LoginFormComponent {
                        state: state,
                        dispatch: dispatch,
                        config: props.config.clone(),
                        on_authenticated: on_authenticated
                    }
                }
            }
        }
    }
}
