use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers a titled dialog card.
/// Clicking outside the card or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    #[props(into)] title: String,
    #[props(default, into)] description: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/50",
            style: "z-index: 50",
            onclick: move |_| on_close.call(()),
            div {
                class: "relative bg-white rounded-lg shadow-lg max-w-lg w-full mx-4 p-6",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "absolute right-4 top-4 opacity-70 hover:opacity-100",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
                div {
                    class: "mb-4 flex flex-col gap-1.5",
                    h2 { class: "text-lg font-semibold", "{title}" }
                    if !description.is_empty() {
                        p { class: "text-sm text-neutral-500", "{description}" }
                    }
                }
                {children}
            }
        }
    }
}
