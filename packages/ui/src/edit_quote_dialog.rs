use dioxus::prelude::*;
use store::{feed, Quote, QuoteDraft, MAX_QUOTE_LEN};

use crate::auth::use_auth;
use crate::backend::use_client;
use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::icons::FaPenToSquare;
use crate::modal_overlay::ModalOverlay;
use crate::toast::{described, use_toast};
use crate::Icon;

/// Edit button plus the dialog it opens. The fields start from `quote`
/// every time the dialog opens, so closing it discards unsaved edits.
#[component]
pub fn EditQuoteDialog(quote: Quote, on_quote_update: EventHandler<Quote>) -> Element {
    let client = use_client();
    let auth = use_auth();
    let toast = use_toast();
    let mut open = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut content = use_signal(|| quote.content.clone());
    let mut author = use_signal(|| quote.author.clone());

    let open_dialog = {
        let quote = quote.clone();
        move |_: MouseEvent| {
            content.set(quote.content.clone());
            author.set(quote.author.clone());
            open.set(true);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = QuoteDraft::new(content(), author());
        if !draft.is_complete() || loading() {
            return;
        }
        let (client, auth, quote) = (client.clone(), auth.clone(), quote.clone());
        spawn(async move {
            loading.set(true);
            match feed::edit_quote(&client, auth.user_id(), &quote, &draft).await {
                Ok(updated) => {
                    tracing::info!("Updated quote {}", updated.id);
                    on_quote_update.call(updated);
                    toast.success(
                        "Quote updated successfully! ✨".to_string(),
                        described("Your quote has been saved with the new changes."),
                    );
                    open.set(false);
                }
                Err(e) => {
                    tracing::warn!("Updating quote failed: {}", e);
                    toast.error("Failed to update quote".to_string(), described(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    let complete = QuoteDraft::new(content(), author()).is_complete();
    let length = content().chars().count();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "h-8 px-2",
            onclick: open_dialog,
            Icon { icon: FaPenToSquare, width: 14, height: 14 }
            span { class: "sr-only", "Edit quote" }
        }
        if open() {
            ModalOverlay {
                title: "Edit Quote",
                description: "Make changes to your quote. Click save when you're done.",
                on_close: move |_| open.set(false),
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: handle_submit,
                    div {
                        class: "flex flex-col gap-2",
                        Label { html_for: "edit-content", "Quote" }
                        Textarea {
                            id: "edit-content",
                            placeholder: "Enter the quote...",
                            value: content(),
                            required: true,
                            oninput: move |e: FormEvent| content.set(e.value()),
                        }
                        p { class: "text-xs text-neutral-500", "{length}/{MAX_QUOTE_LEN} characters" }
                    }
                    div {
                        class: "flex flex-col gap-2",
                        Label { html_for: "edit-author", "Author" }
                        Input {
                            id: "edit-author",
                            placeholder: "Who said this?",
                            value: author(),
                            required: true,
                            oninput: move |e: FormEvent| author.set(e.value()),
                        }
                    }
                    div {
                        class: "flex justify-end gap-2",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: loading(),
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        Button {
                            r#type: "submit",
                            disabled: loading() || !complete,
                            if loading() { "Saving..." } else { "Save changes" }
                        }
                    }
                }
            }
        }
    }
}
