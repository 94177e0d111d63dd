//! The signed-in user's profile and their own quotes.

use dioxus::prelude::*;
use store::{feed, quote_count_label, Profile, Quote, QuoteStore};
use ui::components::{Button, Card, CardContent, Spinner};
use ui::icons::{FaQuoteLeft, FaUser};
use ui::{
    described, use_auth, use_client, use_toast, EditProfileDialog, Icon, QuoteCard,
};
use uuid::Uuid;

use crate::Route;

#[component]
pub fn ProfilePage() -> Element {
    let client = use_client();
    let auth = use_auth();
    let toast = use_toast();
    let mut quotes = use_signal(Vec::<Quote>::new);
    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut loading = use_signal(|| true);
    let mut deleting = use_signal(|| Option::<Uuid>::None);

    let user = auth.user();
    let user_id = user.as_ref().map(|u| u.id);

    use_effect({
        let client = client.clone();
        move || {
            let Some(user_id) = user_id else {
                loading.set(false);
                return;
            };
            let client = client.clone();
            spawn(async move {
                match client.list_user_quotes(user_id).await {
                    Ok(loaded) => quotes.set(loaded),
                    Err(e) => {
                        tracing::warn!("Loading own quotes failed: {}", e);
                        toast.error(
                            "Error loading your quotes".to_string(),
                            described(e.to_string()),
                        );
                    }
                }
                match client.get_profile(user_id).await {
                    Ok(loaded) => profile.set(loaded),
                    Err(e) => {
                        tracing::warn!("Loading profile failed: {}", e);
                        toast.error("Error loading profile".to_string(), described(e.to_string()));
                    }
                }
                loading.set(false);
            });
        }
    });

    let handle_delete = move |id: Uuid| {
        if deleting().is_some() {
            return;
        }
        let (client, auth) = (client.clone(), auth.clone());
        spawn(async move {
            deleting.set(Some(id));
            let current = quotes();
            match feed::delete_quote(&client, auth.user_id(), &current, id).await {
                Ok(remaining) => {
                    tracing::info!("Deleted quote {}", id);
                    quotes.set(remaining);
                    toast.success(
                        "Quote deleted ✨".to_string(),
                        described("Your quote has been removed successfully."),
                    );
                }
                Err(e) => {
                    tracing::warn!("Deleting quote {} failed: {}", id, e);
                    toast.error("Failed to delete quote".to_string(), described(e.to_string()));
                }
            }
            deleting.set(None);
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center gap-3 py-24 text-neutral-500",
                Spinner {}
                "Loading your beautiful quotes..."
            }
        };
    }

    let email = user.as_ref().map(|u| u.label().to_string()).unwrap_or_default();
    let current_profile = profile();
    let name = current_profile
        .as_ref()
        .map(|p| p.display_name_or(&email).to_string())
        .unwrap_or_else(|| email.clone());
    let bio = current_profile.as_ref().and_then(|p| p.bio.clone());
    let avatar = current_profile.as_ref().and_then(|p| p.avatar_url.clone());
    let count = quote_count_label(quotes.read().len());

    rsx! {
        div {
            class: "flex flex-col gap-8",
            Card {
                CardContent {
                    class: "pt-6",
                    div {
                        class: "flex flex-col items-center gap-6 sm:flex-row sm:items-start",
                        div {
                            class: "flex h-20 w-20 shrink-0 items-center justify-center overflow-hidden rounded-full bg-indigo-100 text-indigo-600",
                            if let Some(avatar) = avatar {
                                img { class: "h-full w-full object-cover", src: "{avatar}", alt: "{name}" }
                            } else {
                                Icon { icon: FaUser, width: 32, height: 32 }
                            }
                        }
                        div {
                            class: "flex flex-1 flex-col gap-2 text-center sm:text-left",
                            h1 { class: "text-2xl font-bold text-neutral-900", "{name}" }
                            if let Some(bio) = bio {
                                p { class: "text-neutral-600", "{bio}" }
                            }
                            p { class: "text-sm text-neutral-500", "{count}" }
                        }
                        EditProfileDialog {
                            on_profile_update: move |saved: Profile| profile.set(Some(saved)),
                        }
                    }
                }
            }
            div {
                class: "flex flex-col gap-4",
                h2 { class: "text-xl font-semibold text-neutral-900", "My Quotes" }
                if quotes.read().is_empty() {
                    div {
                        class: "flex flex-col items-center gap-4 py-12 text-center",
                        div {
                            class: "text-neutral-300",
                            Icon { icon: FaQuoteLeft, width: 48, height: 48 }
                        }
                        h3 { class: "text-xl font-semibold", "No quotes yet" }
                        p { class: "text-neutral-600", "Share your first quote with the community." }
                        Link {
                            to: Route::Submit {},
                            Button { "Submit a Quote" }
                        }
                    }
                } else {
                    for quote in quotes() {
                        QuoteCard {
                            key: "{quote.id}",
                            deleting: deleting() == Some(quote.id),
                            quote: quote.clone(),
                            on_update: move |updated: Quote| {
                                let next = feed::replace_quote(&quotes.read(), &updated);
                                quotes.set(next);
                            },
                            on_delete: handle_delete.clone(),
                        }
                    }
                }
            }
        }
    }
}
