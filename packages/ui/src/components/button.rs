use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 text-white hover:bg-indigo-700",
            ButtonVariant::Outline => {
                "border border-neutral-300 bg-white text-neutral-800 hover:bg-neutral-100"
            }
            ButtonVariant::Ghost => "text-neutral-700 hover:bg-neutral-100",
            ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-700",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string(), into)] r#type: String,
    #[props(default, into)] class: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let tone = variant.class();
    rsx! {
        button {
            class: "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 {tone} {class}",
            r#type: r#type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
