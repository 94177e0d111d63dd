//! Authentication context and hooks for the UI.

use api::{AuthUser, Client, Session, SignUpOutcome};
use dioxus::prelude::*;
use store::{Credentials, StoreError};
use uuid::Uuid;

use crate::backend::use_client;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub session: Option<Session>,
    /// True until the stored session has been checked once.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    fn settled(session: Option<Session>) -> Self {
        Self {
            user: session.as_ref().map(|s| s.user.clone()),
            session,
            loading: false,
        }
    }
}

/// Handle on the auth context: the current state plus the actions that
/// change it.
#[derive(Clone)]
pub struct Auth {
    state: Signal<AuthState>,
    client: Client,
}

impl Auth {
    pub fn state(&self) -> AuthState {
        (self.state)()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.read().user.clone()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.state.read().user.as_ref().map(|u| u.id)
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub async fn sign_in(&self, credentials: Credentials) -> Result<(), StoreError> {
        self.client
            .auth()
            .sign_in_with_password(&credentials)
            .await?;
        Ok(())
    }

    pub async fn sign_up(&self, credentials: Credentials) -> Result<SignUpOutcome, StoreError> {
        credentials.validate_sign_up()?;
        Ok(self.client.auth().sign_up(&credentials).await?)
    }

    /// Always ends signed out locally, even when the server cannot be told.
    pub async fn sign_out(&self) {
        self.client.auth().sign_out().await;
    }
}

/// The auth context provided by [`AuthProvider`].
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that tracks the signed-in user.
///
/// On mount it resolves the stored session (refreshing it if needed), then
/// mirrors every session change the client publishes: sign-in, sign-out and
/// token refresh.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_client();
    let mut state = use_signal(AuthState::default);

    use_context_provider({
        let client = client.clone();
        move || Auth { state, client }
    });

    use_future(move || {
        let client = client.clone();
        async move {
            // Subscribe first so a refresh during the initial check is not missed.
            let mut changes = client.auth().subscribe();

            let session = match client.auth().get_session().await {
                Ok(session) => session,
                Err(e) => {
                    tracing::warn!("Could not restore session: {}", e);
                    client.auth().current_session()
                }
            };
            state.set(AuthState::settled(session));

            while changes.changed().await.is_ok() {
                let change = changes.borrow_and_update().clone();
                tracing::debug!("Auth change: {:?}", change.event);
                state.set(AuthState::settled(change.session));
            }
        }
    });

    rsx! {
        {children}
    }
}
