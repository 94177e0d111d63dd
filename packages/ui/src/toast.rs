//! Transient notifications on top of `dioxus_primitives::toast`.
//!
//! [`Toaster`] installs the provider; [`use_toast`] returns the handle whose
//! `success` and `error` methods push a toast. Error toasts render in the
//! destructive style. Only the newest toast is kept on screen.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Options for a toast with `description` under its title, dismissed after
/// [`TOAST_DURATION`].
pub fn described(description: impl Into<String>) -> ToastOptions {
    ToastOptions::new()
        .description(description.into())
        .duration(TOAST_DURATION)
}

/// Provides the toast handle to `children` and renders the toast viewport.
#[component]
pub fn Toaster(children: Element) -> Element {
    rsx! {
        toast::ToastProvider {
            max_toasts: TOAST_LIMIT,
            {children}
        }
    }
}
