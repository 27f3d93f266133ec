use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Inline progress affordance, rendered as a span so it can sit inside the
/// submit button.
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-indicator",
            "⏳ {props.message}"
        }
    }
}
