//! # QuoteStore: the table operations every backend provides
//!
//! The application never talks to a table directly; every view goes through
//! [`QuoteStore`], so the same page logic runs against the managed backend
//! (`api::Client`) and against [`crate::MemoryStore`] in tests.
//!
//! | Method | Filter semantics |
//! |--------|------------------|
//! | [`list_quotes`](QuoteStore::list_quotes) | every quote, newest first |
//! | [`list_user_quotes`](QuoteStore::list_user_quotes) | `user_id = owner`, newest first |
//! | [`insert_quote`](QuoteStore::insert_quote) | returns the stored row |
//! | [`update_quote`](QuoteStore::update_quote) | `id = id AND user_id = owner`; no match is [`StoreError::NotFound`] |
//! | [`delete_quote`](QuoteStore::delete_quote) | `id = id AND user_id = owner`; no match is [`StoreError::NotFound`] |
//! | [`get_profile`](QuoteStore::get_profile) | `user_id = owner`, at most one row; none is `Ok(None)` |
//! | [`upsert_profile`](QuoteStore::upsert_profile) | insert, or update the row with the same `user_id` |
//!
//! The owner filter on update and delete repeats what the backend's row-level
//! security already enforces.
//!
//! Futures carry no `Send` bound: the browser runtime is single-threaded and
//! `reqwest` futures on `wasm32` are not `Send`.

use std::future::Future;

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewQuote, Profile, ProfileUpsert, Quote, QuoteChanges};

/// Async access to the `quotes` and `profiles` tables.
pub trait QuoteStore {
    fn list_quotes(&self) -> impl Future<Output = Result<Vec<Quote>, StoreError>>;

    fn list_user_quotes(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Quote>, StoreError>>;

    fn insert_quote(
        &self,
        quote: NewQuote,
    ) -> impl Future<Output = Result<Quote, StoreError>>;

    fn update_quote(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: QuoteChanges,
    ) -> impl Future<Output = Result<Quote, StoreError>>;

    fn delete_quote(
        &self,
        id: Uuid,
        owner: Uuid,
    ) -> impl Future<Output = Result<(), StoreError>>;

    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, StoreError>>;

    fn upsert_profile(
        &self,
        profile: ProfileUpsert,
    ) -> impl Future<Output = Result<Profile, StoreError>>;
}

/// Sort newest first, the order every feed is rendered in.
pub fn sort_newest_first(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
