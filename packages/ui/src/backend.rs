//! Provides the backend client to the component tree.

use api::Client;
use dioxus::prelude::*;

/// The client every view reads and writes through.
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Creates the backend client once from the environment and provides it to
/// `children`. Without a usable configuration nothing else can work, so a
/// setup message is rendered instead.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    let client = use_hook(|| {
        Client::from_env().map_err(|e| {
            tracing::error!("Backend configuration unusable: {}", e);
            e.to_string()
        })
    });

    match client {
        Ok(client) => rsx! {
            ClientScope { client, {children} }
        },
        Err(message) => rsx! {
            div {
                class: "config-error",
                h1 { "QuickQuotes is not configured" }
                p { "{message}" }
                p { "Set SUPABASE_URL and SUPABASE_ANON_KEY and rebuild." }
            }
        },
    }
}

#[component]
fn ClientScope(client: Client, children: Element) -> Element {
    use_context_provider(|| client);
    rsx! {
        {children}
    }
}
