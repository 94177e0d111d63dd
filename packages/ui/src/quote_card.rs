use dioxus::prelude::*;
use store::Quote;
use uuid::Uuid;

use crate::components::{Button, ButtonVariant, Card, CardContent, Spinner};
use crate::edit_quote_dialog::EditQuoteDialog;
use crate::icons::{FaQuoteLeft, FaTrash};
use crate::Icon;

/// One quote: content, author and submission date. Edit and delete actions
/// are shown only when the matching handler is given.
#[component]
pub fn QuoteCard(
    quote: Quote,
    on_update: Option<EventHandler<Quote>>,
    on_delete: Option<EventHandler<Uuid>>,
    #[props(default)] deleting: bool,
) -> Element {
    let id = quote.id;
    let date = quote.display_date();

    rsx! {
        Card {
            class: "transition-shadow hover:shadow-md",
            CardContent {
                class: "pt-6",
                div {
                    class: "flex gap-3",
                    div {
                        class: "text-indigo-500 shrink-0 pt-1",
                        Icon { icon: FaQuoteLeft, width: 18, height: 18 }
                    }
                    div {
                        class: "flex-1 flex flex-col gap-3",
                        blockquote {
                            class: "text-lg italic leading-relaxed text-neutral-800 whitespace-pre-wrap",
                            "\"{quote.content}\""
                        }
                        div {
                            class: "flex items-center justify-between text-sm text-neutral-500",
                            cite { class: "not-italic font-medium text-neutral-700", "— {quote.author}" }
                            div {
                                class: "flex items-center gap-1",
                                span { "{date}" }
                                if let Some(on_update) = on_update {
                                    EditQuoteDialog {
                                        quote: quote.clone(),
                                        on_quote_update: move |updated| on_update.call(updated),
                                    }
                                }
                                if let Some(on_delete) = on_delete {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        class: "h-8 px-2 text-red-600 hover:text-red-700",
                                        disabled: deleting,
                                        onclick: move |_| on_delete.call(id),
                                        if deleting {
                                            Spinner { class: "h-3.5 w-3.5" }
                                        } else {
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                        span { class: "sr-only", "Delete quote" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
