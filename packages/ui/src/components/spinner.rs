use dioxus::prelude::*;

/// Indeterminate loading indicator.
#[component]
pub fn Spinner(#[props(default = "h-8 w-8".to_string(), into)] class: String) -> Element {
    rsx! {
        div {
            class: "animate-spin rounded-full border-2 border-indigo-600 border-t-transparent {class}",
            role: "status",
            aria_label: "Loading",
        }
    }
}
