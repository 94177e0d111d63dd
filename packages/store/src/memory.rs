use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewQuote, Profile, ProfileUpsert, Quote, QuoteChanges};
use crate::repo::{sort_newest_first, QuoteStore};

#[derive(Debug, Default)]
struct Tables {
    quotes: Vec<Quote>,
    profiles: HashMap<Uuid, Profile>,
    /// Logical clock so rows inserted back to back still order strictly.
    ticks: i64,
}

impl Tables {
    fn now(&mut self, epoch: DateTime<Utc>) -> DateTime<Utc> {
        self.ticks += 1;
        epoch + Duration::milliseconds(self.ticks)
    }
}

/// In-memory QuoteStore for testing. Applies the same filters as the
/// managed backend, owner checks included.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    epoch: DateTime<Utc>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            tables: Arc::default(),
            epoch: Utc::now(),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Remote("memory store poisoned".to_string()))
    }
}

impl QuoteStore for MemoryStore {
    async fn list_quotes(&self) -> Result<Vec<Quote>, StoreError> {
        let mut quotes = self.lock()?.quotes.clone();
        sort_newest_first(&mut quotes);
        Ok(quotes)
    }

    async fn list_user_quotes(&self, user_id: Uuid) -> Result<Vec<Quote>, StoreError> {
        let mut quotes: Vec<Quote> = self
            .lock()?
            .quotes
            .iter()
            .filter(|q| q.is_owned_by(user_id))
            .cloned()
            .collect();
        sort_newest_first(&mut quotes);
        Ok(quotes)
    }

    async fn insert_quote(&self, quote: NewQuote) -> Result<Quote, StoreError> {
        let mut tables = self.lock()?;
        let now = tables.now(self.epoch);
        let row = Quote {
            id: Uuid::new_v4(),
            content: quote.content,
            author: quote.author,
            user_id: quote.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.quotes.push(row.clone());
        Ok(row)
    }

    async fn update_quote(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: QuoteChanges,
    ) -> Result<Quote, StoreError> {
        let mut tables = self.lock()?;
        let now = tables.now(self.epoch);
        let row = tables
            .quotes
            .iter_mut()
            .find(|q| q.id == id && q.is_owned_by(owner))
            .ok_or(StoreError::NotFound)?;
        row.content = changes.content;
        row.author = changes.author;
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete_quote(&self, id: Uuid, owner: Uuid) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        let before = tables.quotes.len();
        tables.quotes.retain(|q| !(q.id == id && q.is_owned_by(owner)));
        if tables.quotes.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.lock()?.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: ProfileUpsert) -> Result<Profile, StoreError> {
        let mut tables = self.lock()?;
        let now = tables.now(self.epoch);
        let row = tables
            .profiles
            .entry(profile.user_id)
            .or_insert_with(|| Profile {
                id: Uuid::new_v4(),
                user_id: profile.user_id,
                display_name: None,
                bio: None,
                avatar_url: None,
                created_at: now,
                updated_at: now,
            });
        row.display_name = profile.display_name;
        row.bio = profile.bio;
        row.avatar_url = profile.avatar_url;
        row.updated_at = now;
        Ok(row.clone())
    }
}
