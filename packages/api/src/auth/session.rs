//! Session data types and the slot the current session lives in.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AuthUser;

/// Refresh this long before the access token actually expires.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// A signed-in session as issued by `/auth/v1/token` and `/auth/v1/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: i64,
    /// Unix seconds. Older auth servers omit it; it is then derived from
    /// `expires_in` when the session is received.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Fill in `expires_at` relative to `now` when the server left it out.
    pub fn with_expiry(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now.timestamp() + self.expires_in);
        }
        self
    }

    /// True once `now` is within [`EXPIRY_MARGIN_SECS`] of the expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(at) => now.timestamp() + EXPIRY_MARGIN_SECS >= at,
            None => false,
        }
    }
}

/// What happened to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChangeEvent {
    /// The session found at startup (possibly none).
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A session change as seen by subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthChange {
    pub event: AuthChangeEvent,
    pub session: Option<Session>,
}

impl AuthChange {
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }
}

/// Holds the current session and mirrors it into browser storage.
#[derive(Clone, Debug)]
pub(crate) struct SessionSlot {
    key: String,
    current: Arc<Mutex<Option<Session>>>,
}

impl SessionSlot {
    pub(crate) fn new(key: String) -> Self {
        let restored = persisted::load(&key);
        Self {
            key,
            current: Arc::new(Mutex::new(restored)),
        }
    }

    pub(crate) fn get(&self) -> Option<Session> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set(&self, session: Option<Session>) {
        match &session {
            Some(s) => persisted::save(&self.key, s),
            None => persisted::remove(&self.key),
        }
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

#[cfg(target_arch = "wasm32")]
mod persisted {
    use super::Session;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub(super) fn load(key: &str) -> Option<Session> {
        let raw = storage()?.get_item(key).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                None
            }
        }
    }

    pub(super) fn save(key: &str, session: &Session) {
        let Some(storage) = storage() else { return };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(key, &raw).is_err() {
                    tracing::warn!("Failed to persist session");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }

    pub(super) fn remove(key: &str) {
        let Some(storage) = storage() else { return };
        if storage.remove_item(key).is_err() {
            tracing::warn!("Failed to clear persisted session");
        }
    }
}

// Native builds keep the session in memory only.
#[cfg(not(target_arch = "wasm32"))]
mod persisted {
    use super::Session;

    pub(super) fn load(_key: &str) -> Option<Session> {
        None
    }

    pub(super) fn save(_key: &str, _session: &Session) {}

    pub(super) fn remove(_key: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn session(expires_at: Option<i64>) -> Session {
        Session {
            access_token: "access".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at,
            refresh_token: "refresh".to_string(),
            user: AuthUser {
                id: Uuid::new_v4(),
                email: Some("ada@example.com".to_string()),
            },
        }
    }

    #[test]
    fn test_expiry_margin() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ts = now.timestamp();

        assert!(!session(Some(ts + 3600)).is_expired(now));
        assert!(session(Some(ts + EXPIRY_MARGIN_SECS)).is_expired(now));
        assert!(session(Some(ts - 1)).is_expired(now));
    }

    #[test]
    fn test_with_expiry_derives_missing_value() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let s = session(None).with_expiry(now);
        assert_eq!(s.expires_at, Some(now.timestamp() + 3600));

        // Server-provided value wins
        let s = session(Some(42)).with_expiry(now);
        assert_eq!(s.expires_at, Some(42));
    }

    #[test]
    fn test_slot_set_and_clear() {
        let slot = SessionSlot::new("sb-test-auth-token".to_string());
        assert!(slot.get().is_none());

        let s = session(Some(1));
        slot.set(Some(s.clone()));
        assert_eq!(slot.get(), Some(s));

        // Clones share the slot
        let other = slot.clone();
        other.set(None);
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_decode_token_response() {
        let raw = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1700000000,
            "refresh_token": "r1",
            "user": {
                "id": "9f2f3a5e-2d7e-4f4b-8f5e-0c2a1b3c4d5e",
                "aud": "authenticated",
                "email": "ada@example.com",
                "app_metadata": {"provider": "email"}
            }
        }"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.expires_at, Some(1_700_000_000));
        assert_eq!(session.user.label(), "ada@example.com");
    }
}
