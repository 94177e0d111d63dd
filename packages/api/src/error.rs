//! Errors returned by the backend client, and decoding of the error bodies
//! the auth and table APIs send back.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::StoreError;
use thiserror::Error;

/// PostgREST code for "a single row was requested but none matched".
pub const NO_ROWS_CODE: &str = "PGRST116";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx response, with the message the backend supplied.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// A `single()` select that matched nothing.
    pub fn is_no_rows(&self) -> bool {
        self.code() == Some(NO_ROWS_CODE)
    }

    /// The backend rejected the request itself (as opposed to the request
    /// never arriving).
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Api { status, .. } if (400..500).contains(status))
    }

    /// Build from a non-success response.
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_body(status, &body)
    }

    pub(crate) fn from_body(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let fallback = status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();

        ApiError::Api {
            status: status.as_u16(),
            code: parsed.code(),
            message: parsed.message().unwrap_or(fallback),
        }
    }
}

/// Union of the error shapes the auth API (`msg`, `error_description`,
/// numeric `code`) and the table API (`message`, string `code`) return.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<serde_json::Value>,
    error_code: Option<String>,
    message: Option<String>,
    msg: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl ErrorBody {
    fn code(&self) -> Option<String> {
        match &self.code {
            Some(serde_json::Value::String(code)) => Some(code.clone()),
            _ => self.error_code.clone(),
        }
    }

    fn message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Fail on non-2xx, otherwise pass the response through.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response).await)
    }
}

/// Fail on non-2xx, otherwise decode the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        if err.is_no_rows() {
            return StoreError::NotFound;
        }
        match err {
            ApiError::NotAuthenticated => StoreError::NotAuthenticated,
            other => StoreError::Remote(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_body() {
        let err = ApiError::from_body(
            StatusCode::NOT_ACCEPTABLE,
            r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#,
        );
        assert!(err.is_no_rows());
        assert_eq!(err.status(), Some(406));
        assert_eq!(StoreError::from(err), StoreError::NotFound);
    }

    #[test]
    fn test_auth_error_bodies() {
        let err = ApiError::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(err.code(), Some("invalid_credentials"));
        assert!(err.is_rejection());

        let err = ApiError::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Refresh Token Not Found"}"#,
        );
        assert_eq!(err.to_string(), "Refresh Token Not Found");
    }

    #[test]
    fn test_unparseable_body_uses_status_text() {
        let err = ApiError::from_body(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
        assert_eq!(err.to_string(), "Bad Gateway");
        assert!(!err.is_rejection());
        assert_eq!(
            StoreError::from(err),
            StoreError::Remote("Bad Gateway".to_string())
        );
    }
}
