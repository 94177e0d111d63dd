use dioxus::prelude::*;

use crate::icons::FaQuoteLeft;
use crate::Icon;

/// Sticky header with the brand on the left and `children` (links,
/// actions) on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "sticky top-0 z-40 border-b border-neutral-200 bg-white/90 backdrop-blur",
            div {
                class: "mx-auto flex h-14 max-w-4xl items-center justify-between px-4",
                div {
                    class: "flex items-center gap-2 font-bold text-lg text-indigo-600",
                    Icon { icon: FaQuoteLeft, width: 18, height: 18 }
                    "QuickQuotes"
                }
                nav {
                    class: "flex items-center gap-1",
                    {children}
                }
            }
        }
    }
}
