pub mod error;
pub mod feed;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use error::{StoreError, ValidationError};
pub use models::{
    quote_count_label, Credentials, NewQuote, Profile, ProfileForm, ProfileUpsert, Quote,
    QuoteChanges, QuoteDraft, MAX_QUOTE_LEN, MIN_PASSWORD_LEN,
};
pub use repo::QuoteStore;
