use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-neutral-200 bg-white shadow-sm {class}",
            {children}
        }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "flex flex-col gap-1.5 p-6", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "text-2xl font-semibold leading-none tracking-tight", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "text-sm text-neutral-500", {children} }
    }
}

#[component]
pub fn CardContent(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "p-6 pt-0 {class}", {children} }
    }
}
