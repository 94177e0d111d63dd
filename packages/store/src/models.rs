//! # Domain models for quotes and profiles
//!
//! Mirrors the two tables the managed backend owns. Row types are
//! `Serialize + Deserialize` so they decode straight from the REST API and can
//! be handed to the UI unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Quote`] | A row of the `quotes` table. |
//! | [`Profile`] | A row of the `profiles` table, one per user. |
//! | [`QuoteDraft`] | Raw, untrimmed form fields for submitting or editing a quote. |
//! | [`NewQuote`] | Insert payload. Only obtainable through [`QuoteDraft::validate`]. |
//! | [`QuoteChanges`] | Update payload carrying the edited fields only. |
//! | [`ProfileForm`] | Raw profile form fields (empty string = unset). |
//! | [`ProfileUpsert`] | Upsert payload keyed on `user_id`. |
//! | [`Credentials`] | Email and password from the auth form. |
//!
//! Validation happens client-side before any remote call; the backend
//! re-validates on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Maximum quote length accepted by the submit and edit forms.
pub const MAX_QUOTE_LEN: usize = 500;

/// A quote row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    /// Creation date as `M/D/YYYY`.
    pub fn display_date(&self) -> String {
        self.created_at.format("%-m/%-d/%Y").to_string()
    }

    /// Copy of this quote with the edited fields applied.
    pub fn with_changes(&self, changes: &QuoteChanges) -> Self {
        Self {
            content: changes.content.clone(),
            author: changes.author.clone(),
            ..self.clone()
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// A profile row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Display name, falling back to `fallback` (usually the email) when unset.
    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(fallback)
    }
}

/// Untrimmed quote form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteDraft {
    pub content: String,
    pub author: String,
}

impl QuoteDraft {
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }

    /// Pre-fill a draft from an existing quote (edit dialog).
    pub fn from_quote(quote: &Quote) -> Self {
        Self::new(quote.content.clone(), quote.author.clone())
    }

    /// True when both fields hold something besides whitespace.
    /// Forms use this to enable their submit button.
    pub fn is_complete(&self) -> bool {
        !self.content.trim().is_empty() && !self.author.trim().is_empty()
    }

    /// Character count shown under the content field.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Validate and trim into the edited fields of an update.
    pub fn changes(&self) -> Result<QuoteChanges, ValidationError> {
        let content = self.content.trim();
        let author = self.author.trim();

        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        let len = content.chars().count();
        if len > MAX_QUOTE_LEN {
            return Err(ValidationError::ContentTooLong {
                len,
                max: MAX_QUOTE_LEN,
            });
        }

        Ok(QuoteChanges {
            content: content.to_string(),
            author: author.to_string(),
        })
    }

    /// Validate and trim into an insert payload owned by `user_id`.
    pub fn validate(&self, user_id: Uuid) -> Result<NewQuote, ValidationError> {
        let QuoteChanges { content, author } = self.changes()?;
        Ok(NewQuote {
            content,
            author,
            user_id,
        })
    }
}

/// Insert payload for the `quotes` table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewQuote {
    pub content: String,
    pub author: String,
    pub user_id: Uuid,
}

/// Update payload for the `quotes` table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuoteChanges {
    pub content: String,
    pub author: String,
}

/// Profile form fields. An empty string means "not set".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
}

impl ProfileForm {
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };
        Self {
            display_name: profile.display_name.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            avatar_url: profile.avatar_url.clone().unwrap_or_default(),
        }
    }

    pub fn into_upsert(self, user_id: Uuid) -> ProfileUpsert {
        ProfileUpsert {
            user_id,
            display_name: non_empty(self.display_name),
            bio: non_empty(self.bio),
            avatar_url: non_empty(self.avatar_url),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Upsert payload for the `profiles` table. `None` serializes as `null`
/// so clearing a field clears it remotely.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpsert {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Minimum password length enforced by the sign-up form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Email and password as typed into the auth form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks applied before a sign-up request. Sign-in is left to the
    /// backend so that its "invalid credentials" message is what users see.
    pub fn validate_sign_up(&self) -> Result<(), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// `"1 quote"` / `"3 quotes"`.
pub fn quote_count_label(count: usize) -> String {
    if count == 1 {
        "1 quote".to_string()
    } else {
        format!("{count} quotes")
    }
}
