//! The community feed: every quote, newest first.

use dioxus::prelude::*;
use store::{Quote, QuoteStore};
use ui::components::{Button, Spinner};
use ui::icons::FaQuoteLeft;
use ui::{described, use_client, use_toast, Icon, QuoteCard};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let toast = use_toast();
    let mut quotes = use_signal(Vec::<Quote>::new);
    let mut loading = use_signal(|| true);

    use_future(move || {
        let client = client.clone();
        async move {
            match client.list_quotes().await {
                Ok(loaded) => {
                    tracing::debug!("Loaded {} quotes", loaded.len());
                    quotes.set(loaded);
                }
                Err(e) => {
                    tracing::warn!("Loading quotes failed: {}", e);
                    toast.error("Error loading quotes".to_string(), described(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center gap-3 py-24 text-neutral-500",
                Spinner {}
                "Loading quotes..."
            }
        };
    }

    rsx! {
        div {
            class: "flex flex-col gap-8",
            div {
                class: "text-center",
                h1 { class: "text-3xl font-bold text-neutral-900", "Inspirational Quotes" }
                p { class: "mt-2 text-neutral-600", "Discover wisdom shared by our community" }
            }
            if quotes.read().is_empty() {
                div {
                    class: "flex flex-col items-center gap-4 py-16 text-center",
                    div {
                        class: "text-neutral-300",
                        Icon { icon: FaQuoteLeft, width: 48, height: 48 }
                    }
                    h3 { class: "text-xl font-semibold", "No quotes yet" }
                    p { class: "text-neutral-600", "Be the first to share an inspiring quote!" }
                    Link {
                        to: Route::Submit {},
                        Button { "Submit a Quote" }
                    }
                }
            } else {
                div {
                    class: "grid gap-4",
                    for quote in quotes() {
                        QuoteCard { key: "{quote.id}", quote: quote.clone() }
                    }
                }
            }
        }
    }
}
