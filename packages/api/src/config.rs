//! Backend configuration from environment variables.
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `SUPABASE_URL` | yes | Project URL, e.g. `https://abcd.supabase.co` |
//! | `SUPABASE_ANON_KEY` | yes | Public anon key sent as `apikey` |
//! | `SITE_URL` | no | Origin used in email confirmation links |
//!
//! Native builds read them at runtime (a `.env` file is honoured). Browser
//! builds have no process environment, so the values are captured when the
//! crate is compiled.

use reqwest::Url;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    url: Url,
    anon_key: String,
    site_url: String,
}

impl SupabaseConfig {
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self, ApiError> {
        let url = Url::parse(url).map_err(|e| ApiError::Config(format!("invalid SUPABASE_URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "SUPABASE_URL must be http(s), got {}",
                url.scheme()
            )));
        }
        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(ApiError::Config("SUPABASE_ANON_KEY is empty".to_string()));
        }

        Ok(Self {
            url,
            anon_key,
            site_url: default_site_url(),
        })
    }

    /// Builder method to set the origin used in confirmation links.
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Load from the process environment (native) or from the values baked in
    /// at compile time (browser).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let url = std::env::var("SUPABASE_URL")
            .map_err(|_| ApiError::Config("SUPABASE_URL not set".to_string()))?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| ApiError::Config("SUPABASE_ANON_KEY not set".to_string()))?;

        let config = Self::new(&url, anon_key)?;
        Ok(match std::env::var("SITE_URL") {
            Ok(site) => config.with_site_url(site),
            Err(_) => config,
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ApiError> {
        let url = option_env!("SUPABASE_URL")
            .ok_or_else(|| ApiError::Config("SUPABASE_URL was not set at build time".to_string()))?;
        let anon_key = option_env!("SUPABASE_ANON_KEY").ok_or_else(|| {
            ApiError::Config("SUPABASE_ANON_KEY was not set at build time".to_string())
        })?;

        let config = Self::new(url, anon_key)?;
        Ok(match option_env!("SITE_URL") {
            Some(site) => config.with_site_url(site),
            None => config,
        })
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    fn base(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }

    /// `{base}/auth/v1/{path}`
    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base(), path)
    }

    /// `{base}/rest/v1/{table}`
    pub fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base(), table)
    }

    /// Where the confirmation email sends a new user.
    pub fn email_redirect_url(&self) -> String {
        format!("{}/home", self.site_url.trim_end_matches('/'))
    }

    /// Key the browser session is persisted under: `sb-<project-ref>-auth-token`,
    /// where the project ref is the first label of the host name.
    pub fn storage_key(&self) -> String {
        let host = self.url.host_str().unwrap_or("local");
        let project_ref = host.split('.').next().unwrap_or(host);
        format!("sb-{project_ref}-auth-token")
    }
}

#[cfg(target_arch = "wasm32")]
fn default_site_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_site_url() -> String {
    "http://localhost:8080".to_string()
}
