//! Error types shared by every [`crate::QuoteStore`] implementation.

use thiserror::Error;

/// A form value rejected before anything is sent to the backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Quote content cannot be empty")]
    EmptyContent,
    #[error("Author cannot be empty")]
    EmptyAuthor,
    #[error("Quote is {len} characters long, the limit is {max}")]
    ContentTooLong { len: usize, max: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Failure of a store operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Please sign in to continue.")]
    NotAuthenticated,
    /// No row matched the filters (missing, or owned by someone else).
    #[error("The requested record was not found")]
    NotFound,
    #[error("{0}")]
    Remote(String),
}
