//! # Authenticated user
//!
//! [`AuthUser`] is the identity the auth API returns inside every session and
//! from `GET /auth/v1/user`. The auth API sends many more fields (metadata,
//! identities, factors); only the ones the application reads are kept, the
//! rest are ignored during decoding.
//!
//! The identity is distinct from the user's [`store::Profile`], which holds
//! display metadata in a regular table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identity from the auth API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthUser {
    /// Label for headers and fallbacks: the email, or "Anonymous".
    pub fn label(&self) -> &str {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or("Anonymous")
    }
}
