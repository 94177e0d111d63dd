//! # Auth client for the managed backend
//!
//! [`AuthClient`] wraps the auth API endpoints the application uses:
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`sign_up`](AuthClient::sign_up) | `POST /auth/v1/signup?redirect_to=...` |
//! | [`sign_in_with_password`](AuthClient::sign_in_with_password) | `POST /auth/v1/token?grant_type=password` |
//! | [`refresh_session`](AuthClient::refresh_session) | `POST /auth/v1/token?grant_type=refresh_token` |
//! | [`sign_out`](AuthClient::sign_out) | `POST /auth/v1/logout` |
//! | [`get_user`](AuthClient::get_user) | `GET /auth/v1/user` |
//!
//! The current session lives in a shared slot (persisted to `localStorage` in
//! the browser). Every change to it is published on a `watch` channel;
//! [`subscribe`](AuthClient::subscribe) hands out receivers, which is how the
//! UI's auth context stays in sync.

mod session;

use std::sync::Arc;

use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use store::Credentials;
use tokio::sync::watch;

use crate::config::SupabaseConfig;
use crate::error::{ensure_success, read_json, ApiError};
use crate::models::AuthUser;

pub use session::{AuthChange, AuthChangeEvent, Session, EXPIRY_MARGIN_SECS};
use session::SessionSlot;

/// Result of a sign-up request.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    /// Email confirmation is disabled; the user is signed in right away.
    SignedIn(Session),
    /// A confirmation link was emailed; no session yet.
    ConfirmationSent(AuthUser),
}

/// The signup endpoint answers with a session when it can sign the user in
/// immediately and with the bare user otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(AuthUser),
}

#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: Arc<SupabaseConfig>,
    slot: SessionSlot,
    changes: Arc<watch::Sender<AuthChange>>,
}

impl AuthClient {
    pub fn new(http: reqwest::Client, config: Arc<SupabaseConfig>) -> Self {
        let slot = SessionSlot::new(config.storage_key());
        let (changes, _) = watch::channel(AuthChange {
            event: AuthChangeEvent::InitialSession,
            session: slot.get(),
        });
        Self {
            http,
            config,
            slot,
            changes: Arc::new(changes),
        }
    }

    /// Receiver of every session change. The receiver starts out holding the
    /// latest change, so a late subscriber still sees the current state.
    pub fn subscribe(&self) -> watch::Receiver<AuthChange> {
        self.changes.subscribe()
    }

    /// The stored session without any network round trip.
    pub fn current_session(&self) -> Option<Session> {
        self.slot.get()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.config.auth_endpoint(path))
            .header("apikey", self.config.anon_key())
    }

    fn store(&self, event: AuthChangeEvent, session: Option<Session>) {
        self.slot.set(session.clone());
        self.changes.send_replace(AuthChange { event, session });
    }

    /// Register a new account. The confirmation email links back to
    /// `<site>/home`.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, ApiError> {
        let redirect = self.config.email_redirect_url();
        tracing::debug!("Signing up {}", credentials.email.trim());

        let response = self
            .request(Method::POST, "signup")
            .query(&[("redirect_to", redirect.as_str())])
            .bearer_auth(self.config.anon_key())
            .json(&serde_json::json!({
                "email": credentials.email.trim(),
                "password": credentials.password,
            }))
            .send()
            .await?;

        match read_json::<SignUpResponse>(response).await? {
            SignUpResponse::Session(session) => {
                let session = session.with_expiry(Utc::now());
                tracing::info!("Signed up and signed in as {}", session.user.label());
                self.store(AuthChangeEvent::SignedIn, Some(session.clone()));
                Ok(SignUpOutcome::SignedIn(session))
            }
            SignUpResponse::User(user) => {
                tracing::info!("Confirmation sent to {}", user.label());
                Ok(SignUpOutcome::ConfirmationSent(user))
            }
        }
    }

    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, ApiError> {
        let response = self
            .request(Method::POST, "token")
            .query(&[("grant_type", "password")])
            .bearer_auth(self.config.anon_key())
            .json(&serde_json::json!({
                "email": credentials.email.trim(),
                "password": credentials.password,
            }))
            .send()
            .await?;

        let session = read_json::<Session>(response).await?.with_expiry(Utc::now());
        tracing::info!("Signed in as {}", session.user.label());
        self.store(AuthChangeEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    /// Exchange a refresh token for a new session.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, ApiError> {
        let response = self
            .request(Method::POST, "token")
            .query(&[("grant_type", "refresh_token")])
            .bearer_auth(self.config.anon_key())
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let session = read_json::<Session>(response).await?.with_expiry(Utc::now());
        tracing::debug!("Refreshed session for {}", session.user.label());
        self.store(AuthChangeEvent::TokenRefreshed, Some(session.clone()));
        Ok(session)
    }

    /// The current session, refreshed first when it is about to expire.
    ///
    /// A refresh the backend rejects (revoked or unknown refresh token) signs
    /// the user out and yields `Ok(None)`. A refresh that fails in transit
    /// leaves the stored session alone and returns the error.
    pub async fn get_session(&self) -> Result<Option<Session>, ApiError> {
        let Some(session) = self.slot.get() else {
            return Ok(None);
        };
        if !session.is_expired(Utc::now()) {
            return Ok(Some(session));
        }

        match self.refresh_session(&session.refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed)),
            Err(e) if e.is_rejection() => {
                tracing::warn!("Session refresh rejected, signing out: {}", e);
                self.store(AuthChangeEvent::SignedOut, None);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the user behind the current access token.
    pub async fn get_user(&self) -> Result<AuthUser, ApiError> {
        let session = self.get_session().await?.ok_or(ApiError::NotAuthenticated)?;
        let response = self
            .request(Method::GET, "user")
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        read_json(response).await
    }

    /// Sign out. The local session is dropped whether or not the backend
    /// acknowledges the logout.
    pub async fn sign_out(&self) {
        if let Some(session) = self.slot.get() {
            let result = self
                .request(Method::POST, "logout")
                .header(AUTHORIZATION, format!("Bearer {}", session.access_token))
                .send()
                .await;
            match result {
                Ok(response) => {
                    if let Err(e) = ensure_success(response).await {
                        tracing::warn!("Logout rejected by server: {}", e);
                    }
                }
                Err(e) => tracing::warn!("Logout request failed: {}", e),
            }
        }
        tracing::info!("Signed out");
        self.store(AuthChangeEvent::SignedOut, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER_ID: &str = "9f2f3a5e-2d7e-4f4b-8f5e-0c2a1b3c4d5e";

    fn token_body(access: &str, expires_at: i64) -> serde_json::Value {
        json!({
            "access_token": access,
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": expires_at,
            "refresh_token": "refresh-1",
            "user": { "id": USER_ID, "email": "ada@example.com" }
        })
    }

    fn client_for(server: &MockServer) -> AuthClient {
        let config = SupabaseConfig::new(&server.uri(), "anon-key")
            .unwrap()
            .with_site_url("http://localhost:8080");
        AuthClient::new(reqwest::Client::new(), Arc::new(config))
    }

    #[tokio::test]
    async fn test_sign_in_stores_session_and_notifies() {
        let server = MockServer::start().await;
        let future = Utc::now().timestamp() + 3600;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", "anon-key"))
            .and(body_json(json!({ "email": "ada@example.com", "password": "hunter22" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("jwt-1", future)))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client_for(&server);
        let mut changes = auth.subscribe();
        assert_eq!(changes.borrow().event, AuthChangeEvent::InitialSession);
        assert!(changes.borrow().session.is_none());

        let session = auth
            .sign_in_with_password(&Credentials::new(" ada@example.com ", "hunter22"))
            .await
            .unwrap();
        assert_eq!(session.access_token, "jwt-1");

        assert!(changes.has_changed().unwrap());
        let change = changes.borrow_and_update().clone();
        assert_eq!(change.event, AuthChangeEvent::SignedIn);
        assert_eq!(change.user().and_then(|u| u.email.as_deref()), Some("ada@example.com"));
        assert_eq!(auth.current_session(), Some(session));
    }

    #[tokio::test]
    async fn test_sign_in_failure_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": 400,
                "error_code": "invalid_credentials",
                "msg": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let auth = client_for(&server);
        let err = auth
            .sign_in_with_password(&Credentials::new("ada@example.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert!(auth.current_session().is_none());
    }

    #[tokio::test]
    async fn test_sign_up_requiring_confirmation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .and(query_param("redirect_to", "http://localhost:8080/home"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": USER_ID,
                "email": "new@example.com",
                "confirmation_sent_at": "2024-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let auth = client_for(&server);
        let outcome = auth
            .sign_up(&Credentials::new("new@example.com", "secret1"))
            .await
            .unwrap();
        match outcome {
            SignUpOutcome::ConfirmationSent(user) => assert_eq!(user.label(), "new@example.com"),
            other => panic!("expected confirmation, got {other:?}"),
        }
        assert!(auth.current_session().is_none());
    }

    #[tokio::test]
    async fn test_sign_up_with_immediate_session() {
        let server = MockServer::start().await;
        let future = Utc::now().timestamp() + 3600;
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("jwt-new", future)))
            .mount(&server)
            .await;

        let auth = client_for(&server);
        let outcome = auth
            .sign_up(&Credentials::new("ada@example.com", "secret1"))
            .await
            .unwrap();
        assert!(matches!(outcome, SignUpOutcome::SignedIn(_)));
        assert_eq!(auth.current_session().unwrap().access_token, "jwt-new");
    }

    #[tokio::test]
    async fn test_expired_session_is_refreshed() {
        let server = MockServer::start().await;
        let now = Utc::now().timestamp();
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("stale", now + 10)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(body_json(json!({ "refresh_token": "refresh-1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("fresh", now + 3600)))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client_for(&server);
        auth.sign_in_with_password(&Credentials::new("ada@example.com", "pw"))
            .await
            .unwrap();
        let changes = auth.subscribe();

        let session = auth.get_session().await.unwrap().unwrap();
        assert_eq!(session.access_token, "fresh");
        assert_eq!(changes.borrow().event, AuthChangeEvent::TokenRefreshed);

        // Fresh session is served from the slot without another refresh
        let again = auth.get_session().await.unwrap().unwrap();
        assert_eq!(again.access_token, "fresh");
    }

    #[tokio::test]
    async fn test_rejected_refresh_signs_out() {
        let server = MockServer::start().await;
        let now = Utc::now().timestamp();
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("stale", now)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Refresh Token Not Found"
            })))
            .mount(&server)
            .await;

        let auth = client_for(&server);
        auth.sign_in_with_password(&Credentials::new("ada@example.com", "pw"))
            .await
            .unwrap();

        assert!(auth.get_session().await.unwrap().is_none());
        assert!(auth.current_session().is_none());
        assert_eq!(auth.subscribe().borrow().event, AuthChangeEvent::SignedOut);
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_when_server_fails() {
        let server = MockServer::start().await;
        let future = Utc::now().timestamp() + 3600;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("jwt", future)))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", "Bearer jwt"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client_for(&server);
        auth.sign_in_with_password(&Credentials::new("ada@example.com", "pw"))
            .await
            .unwrap();
        auth.sign_out().await;

        assert!(auth.current_session().is_none());
        assert_eq!(auth.subscribe().borrow().event, AuthChangeEvent::SignedOut);
    }

    #[tokio::test]
    async fn test_get_user_requires_session() {
        let server = MockServer::start().await;
        let auth = client_for(&server);
        assert!(matches!(
            auth.get_user().await,
            Err(ApiError::NotAuthenticated)
        ));
    }
}
