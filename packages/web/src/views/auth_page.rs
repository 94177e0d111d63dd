use dioxus::prelude::*;
use ui::AuthForm;

use super::use_signed_in_redirect;

#[component]
pub fn AuthPage() -> Element {
    use_signed_in_redirect();

    rsx! {
        div {
            class: "flex min-h-screen items-center justify-center bg-gradient-to-br from-indigo-50 via-white to-purple-50 p-4",
            AuthForm {}
        }
    }
}
