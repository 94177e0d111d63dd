use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No route matches {}", path);

    rsx! {
        div {
            class: "flex min-h-screen flex-col items-center justify-center gap-4 bg-neutral-100",
            h1 { class: "text-4xl font-bold", "404" }
            p { class: "text-xl text-neutral-600", "Oops! Page not found" }
            Link {
                class: "text-indigo-600 underline hover:text-indigo-700",
                to: Route::Landing {},
                "Return to Home"
            }
        }
    }
}
