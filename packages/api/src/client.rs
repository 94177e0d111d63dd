//! [`Client`]: the application's single handle on the managed backend.

use std::fmt::Debug;
use std::sync::Arc;

use store::{NewQuote, Profile, ProfileUpsert, Quote, QuoteChanges, QuoteStore, StoreError};
use uuid::Uuid;

use crate::auth::AuthClient;
use crate::config::SupabaseConfig;
use crate::error::ApiError;
use crate::postgrest::QueryBuilder;

pub const QUOTES_TABLE: &str = "quotes";
pub const PROFILES_TABLE: &str = "profiles";

const QUOTE_COLUMNS: &str = "id,content,author,user_id,created_at,updated_at";
const PROFILE_COLUMNS: &str = "id,user_id,display_name,bio,avatar_url,created_at,updated_at";

/// Auth plus table access, sharing one HTTP client. Cheap to clone.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<SupabaseConfig>,
    auth: AuthClient,
}

impl Client {
    pub fn new(config: SupabaseConfig) -> Self {
        let http = reqwest::Client::new();
        let config = Arc::new(config);
        let auth = AuthClient::new(http.clone(), config.clone());
        Self { http, config, auth }
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(SupabaseConfig::from_env()?))
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// Query a table as the signed-in user, or with the anon key when nobody
    /// is signed in. Row-level security decides what the anon key may read.
    pub async fn table(&self, table: &str) -> Result<QueryBuilder, ApiError> {
        let token = match self.auth.get_session().await? {
            Some(session) => session.access_token,
            None => self.config.anon_key().to_string(),
        };
        Ok(self.query(table, token))
    }

    /// Query a table as the signed-in user; fails without a session.
    async fn table_signed_in(&self, table: &str) -> Result<QueryBuilder, ApiError> {
        let session = self
            .auth
            .get_session()
            .await?
            .ok_or(ApiError::NotAuthenticated)?;
        Ok(self.query(table, session.access_token))
    }

    fn query(&self, table: &str, token: String) -> QueryBuilder {
        QueryBuilder::new(
            self.http.clone(),
            self.config.rest_endpoint(table),
            self.config.anon_key(),
            token,
        )
    }
}

/// Clones of one client compare equal.
impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }
}

/// First row of a write that returned its affected rows; none means the
/// filters matched nothing.
fn first_row(rows: Vec<Quote>, what: impl Debug) -> Result<Quote, StoreError> {
    rows.into_iter().next().ok_or_else(|| {
        tracing::warn!("No quote matched {:?}", what);
        StoreError::NotFound
    })
}

impl QuoteStore for Client {
    async fn list_quotes(&self) -> Result<Vec<Quote>, StoreError> {
        Ok(self
            .table(QUOTES_TABLE)
            .await?
            .select(QUOTE_COLUMNS)
            .order("created_at", false)
            .execute()
            .await?)
    }

    async fn list_user_quotes(&self, user_id: Uuid) -> Result<Vec<Quote>, StoreError> {
        Ok(self
            .table(QUOTES_TABLE)
            .await?
            .select(QUOTE_COLUMNS)
            .eq("user_id", user_id)
            .order("created_at", false)
            .execute()
            .await?)
    }

    async fn insert_quote(&self, quote: NewQuote) -> Result<Quote, StoreError> {
        let rows: Vec<Quote> = self
            .table_signed_in(QUOTES_TABLE)
            .await?
            .insert(&quote)?
            .select(QUOTE_COLUMNS)
            .execute()
            .await?;
        first_row(rows, &quote)
    }

    async fn update_quote(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: QuoteChanges,
    ) -> Result<Quote, StoreError> {
        let rows: Vec<Quote> = self
            .table_signed_in(QUOTES_TABLE)
            .await?
            .update(&changes)?
            .eq("id", id)
            .eq("user_id", owner)
            .select(QUOTE_COLUMNS)
            .execute()
            .await?;
        first_row(rows, id)
    }

    async fn delete_quote(&self, id: Uuid, owner: Uuid) -> Result<(), StoreError> {
        let rows: Vec<Quote> = self
            .table_signed_in(QUOTES_TABLE)
            .await?
            .delete()
            .eq("id", id)
            .eq("user_id", owner)
            .select(QUOTE_COLUMNS)
            .execute()
            .await?;
        first_row(rows, id).map(|_| ())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        let result = self
            .table_signed_in(PROFILES_TABLE)
            .await?
            .select(PROFILE_COLUMNS)
            .eq("user_id", user_id)
            .single()
            .execute::<Profile>()
            .await;
        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is_no_rows() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn upsert_profile(&self, profile: ProfileUpsert) -> Result<Profile, StoreError> {
        let rows: Vec<Profile> = self
            .table_signed_in(PROFILES_TABLE)
            .await?
            .upsert(&profile, "user_id")?
            .select(PROFILE_COLUMNS)
            .execute()
            .await?;
        rows.into_iter().next().ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use store::{feed, QuoteDraft};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER_ID: &str = "9f2f3a5e-2d7e-4f4b-8f5e-0c2a1b3c4d5e";
    const QUOTE_ID: &str = "0b6d3f5a-1111-4c2e-9a77-5d1e2f3a4b5c";

    fn quote_row(content: &str) -> serde_json::Value {
        json!({
            "id": QUOTE_ID,
            "content": content,
            "author": "Seneca",
            "user_id": USER_ID,
            "created_at": "2024-05-01T10:00:00.123456+00:00",
            "updated_at": "2024-05-01T10:00:00.123456+00:00"
        })
    }

    async fn signed_in_client(server: &MockServer) -> Client {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "user-jwt",
                "token_type": "bearer",
                "expires_in": 3600,
                "expires_at": Utc::now().timestamp() + 3600,
                "refresh_token": "r",
                "user": { "id": USER_ID, "email": "ada@example.com" }
            })))
            .mount(server)
            .await;

        let client = Client::new(SupabaseConfig::new(&server.uri(), "anon-key").unwrap());
        client
            .auth()
            .sign_in_with_password(&store::Credentials::new("ada@example.com", "pw"))
            .await
            .unwrap();
        client
    }

    fn user() -> Uuid {
        Uuid::parse_str(USER_ID).unwrap()
    }

    #[tokio::test]
    async fn test_list_quotes_newest_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/quotes"))
            .and(query_param("order", "created_at.desc"))
            .and(query_param("select", QUOTE_COLUMNS))
            .and(header("authorization", "Bearer user-jwt"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([quote_row("Time heals")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let quotes = client.list_quotes().await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].content, "Time heals");
        assert_eq!(quotes[0].display_date(), "5/1/2024");
    }

    #[tokio::test]
    async fn test_list_quotes_without_session_uses_anon_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/quotes"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(SupabaseConfig::new(&server.uri(), "anon-key").unwrap());
        assert!(client.list_quotes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_requires_session() {
        let server = MockServer::start().await;
        let client = Client::new(SupabaseConfig::new(&server.uri(), "anon-key").unwrap());
        let quote = QuoteDraft::new("Hello", "Me").validate(user()).unwrap();
        assert_eq!(
            client.insert_quote(quote).await,
            Err(StoreError::NotAuthenticated)
        );
    }

    #[tokio::test]
    async fn test_submit_inserts_trimmed_quote() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/quotes"))
            .and(header("prefer", "return=representation"))
            .and(body_json(json!({
                "content": "Time heals",
                "author": "Seneca",
                "user_id": USER_ID
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!([quote_row("Time heals")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let quote = feed::submit_quote(
            &client,
            Some(user()),
            &QuoteDraft::new("  Time heals ", "Seneca "),
        )
        .await
        .unwrap();
        assert_eq!(quote.id.to_string(), QUOTE_ID);
    }

    #[tokio::test]
    async fn test_update_filters_by_owner() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/quotes"))
            .and(query_param("id", format!("eq.{QUOTE_ID}")))
            .and(query_param("user_id", format!("eq.{USER_ID}")))
            .and(body_json(json!({ "content": "Edited", "author": "Seneca" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([quote_row("Edited")])))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let changes = QuoteChanges {
            content: "Edited".to_string(),
            author: "Seneca".to_string(),
        };
        let id = Uuid::parse_str(QUOTE_ID).unwrap();
        let updated = client.update_quote(id, user(), changes).await.unwrap();
        assert_eq!(updated.content, "Edited");
    }

    #[tokio::test]
    async fn test_delete_matching_nothing_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/quotes"))
            .and(query_param("user_id", format!("eq.{USER_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let id = Uuid::parse_str(QUOTE_ID).unwrap();
        assert_eq!(
            client.delete_quote(id, user()).await,
            Err(StoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_missing_profile_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profiles"))
            .and(header("accept", "application/vnd.pgrst.object+json"))
            .respond_with(ResponseTemplate::new(406).set_body_json(json!({
                "code": "PGRST116",
                "details": "The result contains 0 rows",
                "hint": null,
                "message": "JSON object requested, multiple (or no) rows returned"
            })))
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        assert_eq!(client.get_profile(user()).await, Ok(None));
        let form = feed::load_profile_form(&client, Some(user())).await.unwrap();
        assert_eq!(form, store::ProfileForm::default());
    }

    #[tokio::test]
    async fn test_profile_load_failure_is_not_a_missing_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profiles"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "code": "XX000",
                "message": "database unavailable"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        assert_eq!(
            client.get_profile(user()).await,
            Err(StoreError::Remote("database unavailable".to_string()))
        );
    }

    #[tokio::test]
    async fn test_upsert_profile_sends_nulls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/profiles"))
            .and(query_param("on_conflict", "user_id"))
            .and(body_json(json!({
                "user_id": USER_ID,
                "display_name": "Ada",
                "bio": null,
                "avatar_url": null
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
                "id": "5a5a5a5a-5a5a-4a5a-8a5a-5a5a5a5a5a5a",
                "user_id": USER_ID,
                "display_name": "Ada",
                "bio": null,
                "avatar_url": null,
                "created_at": "2024-05-01T10:00:00+00:00",
                "updated_at": "2024-05-02T10:00:00+00:00"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server).await;
        let form = store::ProfileForm {
            display_name: "Ada".to_string(),
            ..Default::default()
        };
        let profile = feed::save_profile(&client, Some(user()), form).await.unwrap();
        assert_eq!(profile.display_name_or("ada@example.com"), "Ada");
    }

    #[tokio::test]
    async fn test_server_error_message_reaches_caller() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/quotes"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "PGRST301",
                "message": "JWT expired"
            })))
            .mount(&server)
            .await;

        let client = Client::new(SupabaseConfig::new(&server.uri(), "anon-key").unwrap());
        assert_eq!(
            client.list_quotes().await,
            Err(StoreError::Remote("JWT expired".to_string()))
        );
    }
}
