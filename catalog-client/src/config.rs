//! Client configuration

/// Client configuration for connecting to the catalog backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_API_URL | http://localhost:8080 | Backend base URL |
/// | CATALOG_TIMEOUT_SECS | 30 | Request timeout |
/// | CATALOG_REDIRECT_URI | base URL | Where the identity provider returns |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Redirect/return URL handed to the identity provider
    pub redirect_uri: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            redirect_uri: base_url.clone(),
            base_url,
            timeout: 30,
        }
    }

    /// Load from the process environment (and `.env` when present)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var("CATALOG_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let mut config = Self::new(base_url);

        if let Some(timeout) = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Ok(uri) = std::env::var("CATALOG_REDIRECT_URI") {
            config.redirect_uri = uri;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the redirect/return URL
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = uri.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
