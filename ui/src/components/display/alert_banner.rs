use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum AlertSeverity {
    Error,
    Success,
}

impl AlertSeverity {
    fn class_suffix(&self) -> &'static str {
        match self {
            AlertSeverity::Error => "error",
            AlertSeverity::Success => "success",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            AlertSeverity::Error => "✗",
            AlertSeverity::Success => "✓",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AlertBannerProps {
    pub severity: AlertSeverity,
    pub message: String,
}

/// Inline alert region above the form fields. Dismissed by editing a field
/// or retrying, never by an explicit close control.
#[component]
pub fn AlertBanner(props: AlertBannerProps) -> Element {
    rsx! {
        div {
            class: "alert-banner {props.severity.class_suffix()}",
            "{props.severity.prefix()} {props.message}"
        }
    }
}
