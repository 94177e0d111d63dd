//! Sign-in / sign-up form used by the landing and auth pages.

use api::SignUpOutcome;
use dioxus::prelude::*;
use store::{Credentials, MIN_PASSWORD_LEN};

use crate::auth::use_auth;
use crate::components::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label,
};
use crate::toast::{described, use_toast};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    SignUp,
}

#[component]
pub fn AuthForm() -> Element {
    let mut tab = use_signal(|| AuthTab::SignIn);
    let tab_class = move |which: AuthTab| {
        if tab() == which {
            "flex-1 rounded-sm px-3 py-1.5 text-sm font-medium bg-white shadow-sm"
        } else {
            "flex-1 rounded-sm px-3 py-1.5 text-sm font-medium text-neutral-500"
        }
    };

    rsx! {
        Card {
            class: "w-full max-w-md",
            CardHeader {
                CardTitle { "Welcome to QuickQuotes" }
                CardDescription { "Sign in to your account or create a new one" }
            }
            CardContent {
                div {
                    class: "mb-4 flex rounded-md bg-neutral-100 p-1",
                    role: "tablist",
                    button {
                        class: tab_class(AuthTab::SignIn),
                        role: "tab",
                        onclick: move |_| tab.set(AuthTab::SignIn),
                        "Sign In"
                    }
                    button {
                        class: tab_class(AuthTab::SignUp),
                        role: "tab",
                        onclick: move |_| tab.set(AuthTab::SignUp),
                        "Sign Up"
                    }
                }
                if tab() == AuthTab::SignIn {
                    SignInForm {}
                } else {
                    SignUpForm {}
                }
            }
        }
    }
}

#[component]
fn SignInForm() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            loading.set(true);
            match auth.sign_in(Credentials::new(email(), password())).await {
                Ok(()) => {
                    toast.success(
                        "Welcome back! ✨".to_string(),
                        described("You have successfully signed in."),
                    );
                }
                Err(e) => {
                    tracing::warn!("Sign in failed: {}", e);
                    toast.error("Sign in failed".to_string(), described(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        form {
            class: "flex flex-col gap-4",
            onsubmit: handle_sign_in,
            div {
                class: "flex flex-col gap-2",
                Label { html_for: "signin-email", "Email" }
                Input {
                    id: "signin-email",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: email(),
                    required: true,
                    oninput: move |e: FormEvent| email.set(e.value()),
                }
            }
            div {
                class: "flex flex-col gap-2",
                Label { html_for: "signin-password", "Password" }
                Input {
                    id: "signin-password",
                    r#type: "password",
                    placeholder: "Enter your password",
                    value: password(),
                    required: true,
                    oninput: move |e: FormEvent| password.set(e.value()),
                }
            }
            Button {
                r#type: "submit",
                class: "w-full",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign In" }
            }
        }
    }
}

#[component]
fn SignUpForm() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            loading.set(true);
            match auth.sign_up(Credentials::new(email(), password())).await {
                Ok(SignUpOutcome::ConfirmationSent(_)) => {
                    toast.success(
                        "Check your email 📧".to_string(),
                        described("We sent you a confirmation link to complete your registration."),
                    );
                }
                Ok(SignUpOutcome::SignedIn(_)) => {
                    toast.success(
                        "Welcome to QuickQuotes! ✨".to_string(),
                        described("Your account is ready."),
                    );
                }
                Err(e) => {
                    tracing::warn!("Sign up failed: {}", e);
                    toast.error("Sign up failed".to_string(), described(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        form {
            class: "flex flex-col gap-4",
            onsubmit: handle_sign_up,
            div {
                class: "flex flex-col gap-2",
                Label { html_for: "signup-email", "Email" }
                Input {
                    id: "signup-email",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: email(),
                    required: true,
                    oninput: move |e: FormEvent| email.set(e.value()),
                }
            }
            div {
                class: "flex flex-col gap-2",
                Label { html_for: "signup-password", "Password" }
                Input {
                    id: "signup-password",
                    r#type: "password",
                    placeholder: "Create a password",
                    value: password(),
                    required: true,
                    oninput: move |e: FormEvent| password.set(e.value()),
                }
                p { class: "text-xs text-neutral-500", "Must be at least {MIN_PASSWORD_LEN} characters long" }
            }
            Button {
                r#type: "submit",
                class: "w-full",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Sign Up" }
            }
        }
    }
}
