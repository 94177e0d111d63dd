//! Minimal request builder for the table API.
//!
//! ```ignore
//! let quotes: Vec<Quote> = client
//!     .table("quotes")
//!     .await?
//!     .select("id,content,author,user_id,created_at,updated_at")
//!     .eq("user_id", user_id)
//!     .order("created_at", false)
//!     .execute()
//!     .await?;
//! ```
//!
//! Filters are query parameters (`user_id=eq.<id>`). Writes ask for the
//! affected rows back with `Prefer: return=representation`; upserts add
//! `resolution=merge-duplicates`. `single()` switches the `Accept` header to
//! the object media type so the server answers with one object, or with a
//! `PGRST116` error when no row matched.

use std::fmt::Display;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{read_json, ApiError};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

pub struct QueryBuilder {
    http: reqwest::Client,
    url: String,
    api_key: String,
    token: String,
    method: Method,
    query: Vec<(String, String)>,
    prefer: Vec<&'static str>,
    body: Option<serde_json::Value>,
    single: bool,
}

impl QueryBuilder {
    pub(crate) fn new(
        http: reqwest::Client,
        url: String,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            url,
            api_key: api_key.into(),
            token: token.into(),
            method: Method::GET,
            query: Vec::new(),
            prefer: Vec::new(),
            body: None,
            single: false,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.query.push(("select".to_string(), columns.to_string()));
        self
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.query.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.query
            .push(("order".to_string(), format!("{column}.{direction}")));
        self
    }

    /// Expect exactly one row.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn insert<T: Serialize>(mut self, row: &T) -> Result<Self, ApiError> {
        self.method = Method::POST;
        self.body = Some(serde_json::to_value(row)?);
        self.prefer.push("return=representation");
        Ok(self)
    }

    pub fn update<T: Serialize>(mut self, changes: &T) -> Result<Self, ApiError> {
        self.method = Method::PATCH;
        self.body = Some(serde_json::to_value(changes)?);
        self.prefer.push("return=representation");
        Ok(self)
    }

    /// Insert, or merge into the row that conflicts on `on_conflict`.
    pub fn upsert<T: Serialize>(mut self, row: &T, on_conflict: &str) -> Result<Self, ApiError> {
        self.method = Method::POST;
        self.body = Some(serde_json::to_value(row)?);
        self.query
            .push(("on_conflict".to_string(), on_conflict.to_string()));
        self.prefer.push("resolution=merge-duplicates");
        self.prefer.push("return=representation");
        Ok(self)
    }

    pub fn delete(mut self) -> Self {
        self.method = Method::DELETE;
        self.prefer.push("return=representation");
        self
    }

    fn builder(self) -> RequestBuilder {
        let mut request = self
            .http
            .request(self.method, &self.url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.token)
            .query(&self.query);

        if !self.prefer.is_empty() {
            request = request.header("Prefer", self.prefer.join(","));
        }
        if self.single {
            request = request.header(ACCEPT, SINGLE_OBJECT);
        }
        if let Some(body) = self.body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }
        request
    }

    /// The request that [`execute`](Self::execute) would send.
    pub fn build(self) -> Result<Request, ApiError> {
        Ok(self.builder().build()?)
    }

    pub async fn execute<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let method = self.method.clone();
        let url = self.url.clone();
        tracing::debug!("{} {}", method, url);

        let response = self.builder().send().await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> QueryBuilder {
        QueryBuilder::new(
            reqwest::Client::new(),
            "https://abcd.supabase.co/rest/v1/quotes".to_string(),
            "anon",
            "jwt",
        )
    }

    fn pairs(request: &Request) -> Vec<(String, String)> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_select_with_filter_and_order() {
        let request = builder()
            .select("id,content")
            .eq("user_id", "abc")
            .order("created_at", false)
            .build()
            .unwrap();

        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.url().path(), "/rest/v1/quotes");
        assert_eq!(
            pairs(&request),
            vec![
                ("select".to_string(), "id,content".to_string()),
                ("user_id".to_string(), "eq.abc".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
        assert_eq!(header(&request, "apikey"), Some("anon"));
        assert_eq!(header(&request, "authorization"), Some("Bearer jwt"));
        assert_eq!(header(&request, "prefer"), None);
    }

    #[test]
    fn test_single_sets_accept() {
        let request = builder().select("*").single().build().unwrap();
        assert_eq!(header(&request, "accept"), Some(SINGLE_OBJECT));
    }

    #[test]
    fn test_upsert_headers() {
        let request = builder()
            .upsert(&serde_json::json!({ "user_id": "u1", "bio": null }), "user_id")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(
            pairs(&request),
            vec![("on_conflict".to_string(), "user_id".to_string())]
        );
        assert_eq!(
            header(&request, "prefer"),
            Some("resolution=merge-duplicates,return=representation")
        );
        assert_eq!(header(&request, "content-type"), Some("application/json"));
    }

    #[test]
    fn test_delete_with_owner_filter() {
        let request = builder()
            .delete()
            .eq("id", "q1")
            .eq("user_id", "u1")
            .build()
            .unwrap();

        assert_eq!(*request.method(), Method::DELETE);
        assert_eq!(
            pairs(&request),
            vec![
                ("id".to_string(), "eq.q1".to_string()),
                ("user_id".to_string(), "eq.u1".to_string()),
            ]
        );
        assert!(request.body().is_none());
    }
}
