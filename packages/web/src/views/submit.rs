use dioxus::prelude::*;
use store::{feed, QuoteDraft, StoreError, MAX_QUOTE_LEN};
use ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Label, Textarea,
};
use ui::icons::FaPaperPlane;
use ui::{described, use_auth, use_client, use_toast, Icon};

use crate::Route;

#[component]
pub fn Submit() -> Element {
    let client = use_client();
    let auth = use_auth();
    let toast = use_toast();
    let nav = use_navigator();
    let mut content = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let draft = QuoteDraft::new(content(), author());
        let (client, auth) = (client.clone(), auth.clone());
        spawn(async move {
            submitting.set(true);
            match feed::submit_quote(&client, auth.user_id(), &draft).await {
                Ok(quote) => {
                    tracing::info!("Submitted quote {}", quote.id);
                    toast.success(
                        "Quote submitted!".to_string(),
                        described("Your inspirational quote has been shared with the community."),
                    );
                    content.set(String::new());
                    author.set(String::new());
                    nav.push(Route::Home {});
                }
                Err(StoreError::NotAuthenticated) => {
                    toast.error(
                        "Authentication required".to_string(),
                        described("Please sign in to submit a quote."),
                    );
                }
                Err(e) => {
                    tracing::warn!("Submitting quote failed: {}", e);
                    toast.error("Failed to submit quote".to_string(), described(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let complete = QuoteDraft::new(content(), author()).is_complete();
    let length = content().chars().count();
    let counter_class = if length > MAX_QUOTE_LEN {
        "text-xs text-red-600"
    } else {
        "text-xs text-neutral-500"
    };

    rsx! {
        div {
            class: "mx-auto flex max-w-2xl flex-col gap-8",
            div {
                class: "text-center",
                h1 { class: "text-3xl font-bold text-neutral-900", "Share a Quote" }
                p { class: "mt-2 text-neutral-600", "Inspire the community with words that matter to you" }
            }
            Card {
                CardHeader {
                    CardTitle { "Submit Your Quote" }
                    CardDescription { "Share a quote that has inspired you" }
                }
                CardContent {
                    form {
                        class: "flex flex-col gap-6",
                        onsubmit: handle_submit,
                        div {
                            class: "flex flex-col gap-2",
                            Label { html_for: "content", "Quote Content" }
                            Textarea {
                                id: "content",
                                placeholder: "Enter the quote you'd like to share...",
                                value: content(),
                                rows: 5,
                                required: true,
                                disabled: submitting(),
                                oninput: move |e: FormEvent| content.set(e.value()),
                            }
                            p {
                                class: counter_class,
                                "{length}/{MAX_QUOTE_LEN} characters"
                            }
                        }
                        div {
                            class: "flex flex-col gap-2",
                            Label { html_for: "author", "Author" }
                            Input {
                                id: "author",
                                placeholder: "Who said this quote?",
                                value: author(),
                                required: true,
                                disabled: submitting(),
                                oninput: move |e: FormEvent| author.set(e.value()),
                            }
                        }
                        div {
                            class: "flex gap-3",
                            Button {
                                variant: ButtonVariant::Outline,
                                class: "flex-1",
                                disabled: submitting(),
                                onclick: move |_| {
                                    content.set(String::new());
                                    author.set(String::new());
                                },
                                "Clear"
                            }
                            Button {
                                r#type: "submit",
                                class: "flex-1",
                                disabled: submitting() || !complete,
                                Icon { icon: FaPaperPlane, width: 14, height: 14 }
                                if submitting() { "Submitting..." } else { "Submit Quote" }
                            }
                        }
                    }
                }
            }
        }
    }
}
