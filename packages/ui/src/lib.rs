//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{use_client, BackendProvider};

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

pub mod toast;
pub use toast::{described, use_toast, Toaster};

mod navbar;
pub use navbar::Navbar;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth_form;
pub use auth_form::AuthForm;

mod quote_card;
pub use quote_card::QuoteCard;

mod edit_quote_dialog;
pub use edit_quote_dialog::EditQuoteDialog;

mod edit_profile_dialog;
pub use edit_profile_dialog::EditProfileDialog;
