//! # API crate: client for the QuickQuotes managed backend
//!
//! All persistence and identity live in a hosted backend that exposes an auth
//! API and a REST table API. This crate is the only place that speaks HTTP to
//! it; the UI sees [`Client`] (which implements [`store::QuoteStore`]) and
//! [`AuthClient`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Sign-up, sign-in, sign-out, session retrieval and refresh, session-change subscription |
//! | [`client`] | [`Client`]: auth plus table access, and its `QuoteStore` implementation |
//! | [`config`] | Project URL, anon key and site URL from the environment |
//! | [`error`] | [`ApiError`] and decoding of backend error bodies |
//! | [`models`] | [`AuthUser`], the identity inside a session |
//! | [`postgrest`] | Request builder for the table API |
//!
//! Native and browser builds share the same code. The differences are confined
//! to where configuration comes from and where the session is kept
//! (`localStorage` in the browser, memory elsewhere).

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod postgrest;

pub use auth::{AuthChange, AuthChangeEvent, AuthClient, Session, SignUpOutcome};
pub use client::Client;
pub use config::SupabaseConfig;
pub use error::ApiError;
pub use models::AuthUser;
