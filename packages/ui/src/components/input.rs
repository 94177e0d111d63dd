use dioxus::prelude::*;
use dioxus_primitives::label::{self, LabelProps};

const FIELD_CLASS: &str = "w-full rounded-md border border-neutral-300 bg-white px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500 disabled:opacity-50";

#[component]
pub fn Input(
    #[props(default, into)] id: String,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "{FIELD_CLASS} {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default, into)] id: String,
    #[props(default, into)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = 4)] rows: i64,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "{FIELD_CLASS} resize-none {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows,
            required,
            disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(props: LabelProps) -> Element {
    rsx! {
        label::Label {
            class: "text-sm font-medium text-neutral-700",
            html_for: props.html_for,
            attributes: props.attributes,
            {props.children}
        }
    }
}
