//! Public landing page: pitch plus the sign-in / sign-up form.

use dioxus::prelude::*;
use ui::icons::{FaBolt, FaImages, FaUsers};
use ui::{AuthForm, Icon};

use super::use_signed_in_redirect;

#[component]
pub fn Landing() -> Element {
    use_signed_in_redirect();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-indigo-50 via-white to-purple-50",
            div {
                class: "mx-auto grid max-w-6xl items-center gap-12 px-4 py-16 lg:grid-cols-2",
                div {
                    class: "flex flex-col gap-8",
                    div {
                        class: "flex flex-col gap-4",
                        h1 {
                            class: "text-5xl font-bold tracking-tight text-neutral-900",
                            "Quick"
                            span { class: "text-indigo-600", "Quotes" }
                        }
                        p {
                            class: "text-xl text-neutral-600",
                            "Discover, share and collect the words that move you."
                        }
                    }
                    div {
                        class: "grid gap-4",
                        Feature {
                            title: "Community Driven",
                            body: "Join thousands of quote lovers sharing wisdom and inspiration",
                            Icon { icon: FaUsers, width: 20, height: 20 }
                        }
                        Feature {
                            title: "Beautiful Gallery",
                            body: "Browse stunning collections of quotes in our responsive gallery",
                            Icon { icon: FaImages, width: 20, height: 20 }
                        }
                        Feature {
                            title: "Quick & Easy",
                            body: "Share your favorite quotes in seconds with our simple interface",
                            Icon { icon: FaBolt, width: 20, height: 20 }
                        }
                    }
                }
                div {
                    class: "flex justify-center",
                    AuthForm {}
                }
            }
        }
    }
}

#[component]
fn Feature(#[props(into)] title: String, #[props(into)] body: String, children: Element) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-4 rounded-lg bg-white/70 p-4 shadow-sm",
            div { class: "rounded-md bg-indigo-100 p-2 text-indigo-600", {children} }
            div {
                h3 { class: "font-semibold text-neutral-900", "{title}" }
                p { class: "text-sm text-neutral-600", "{body}" }
            }
        }
    }
}
