//! Page-level operations: one remote call each, written once against
//! [`QuoteStore`] so the views and the tests share them.
//!
//! `user` is the signed-in user's id, `None` when nobody is signed in.
//! Drafts are validated before anything is sent.

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Profile, ProfileForm, Quote, QuoteDraft};
use crate::repo::QuoteStore;

/// Validate `draft` and insert it as a quote owned by `user`.
pub async fn submit_quote<S: QuoteStore>(
    store: &S,
    user: Option<Uuid>,
    draft: &QuoteDraft,
) -> Result<Quote, StoreError> {
    let user = user.ok_or(StoreError::NotAuthenticated)?;
    let quote = draft.validate(user)?;
    store.insert_quote(quote).await
}

/// Apply an edit to `quote`. Only content and author are sent; the returned
/// quote is `quote` with those two fields replaced.
pub async fn edit_quote<S: QuoteStore>(
    store: &S,
    user: Option<Uuid>,
    quote: &Quote,
    draft: &QuoteDraft,
) -> Result<Quote, StoreError> {
    let user = user.ok_or(StoreError::NotAuthenticated)?;
    let changes = draft.changes()?;
    store.update_quote(quote.id, user, changes.clone()).await?;
    Ok(quote.with_changes(&changes))
}

/// Delete quote `id` and return `quotes` without it.
pub async fn delete_quote<S: QuoteStore>(
    store: &S,
    user: Option<Uuid>,
    quotes: &[Quote],
    id: Uuid,
) -> Result<Vec<Quote>, StoreError> {
    let user = user.ok_or(StoreError::NotAuthenticated)?;
    store.delete_quote(id, user).await?;
    Ok(quotes.iter().filter(|q| q.id != id).cloned().collect())
}

/// Replace `quote` in `quotes` by id, keeping the position.
pub fn replace_quote(quotes: &[Quote], quote: &Quote) -> Vec<Quote> {
    quotes
        .iter()
        .map(|q| if q.id == quote.id { quote.clone() } else { q.clone() })
        .collect()
}

/// Profile form contents for `user`; a user without a profile row gets an
/// empty form.
pub async fn load_profile_form<S: QuoteStore>(
    store: &S,
    user: Option<Uuid>,
) -> Result<ProfileForm, StoreError> {
    let user = user.ok_or(StoreError::NotAuthenticated)?;
    let profile = store.get_profile(user).await?;
    Ok(ProfileForm::from_profile(profile.as_ref()))
}

pub async fn save_profile<S: QuoteStore>(
    store: &S,
    user: Option<Uuid>,
    form: ProfileForm,
) -> Result<Profile, StoreError> {
    let user = user.ok_or(StoreError::NotAuthenticated)?;
    store.upsert_profile(form.into_upsert(user)).await
}
