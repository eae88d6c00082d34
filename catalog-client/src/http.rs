//! HTTP client for network-based API calls

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP transport used by the catalog API
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET with the bearer token, when one is set
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// GET without an Authorization header
    async fn get_anonymous<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
    fn set_token(&mut self, token: Option<String>);
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    /// Handle the HTTP response.
    ///
    /// Non-2xx bodies are read as the backend error body. The `success`
    /// flag of 2xx bodies is checked by the API layer, not here.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                tracing::debug!(status = status.as_u16(), code = ?body.error_code, "API error response");
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    code: body.error_code,
                    description: body.description,
                });
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Api {
                    status: status.as_u16(),
                    code: None,
                    description: Some(text),
                }),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "GET", url = %url, "request");
        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::handle_response(response).await
    }

    async fn get_anonymous<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "GET", url = %url, "anonymous request");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "request");
        let response = self
            .authorize(self.client.post(&url).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "PATCH", url = %url, "request");
        let response = self
            .authorize(self.client.patch(&url).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", url = %url, "request");
        let response = self.authorize(self.client.delete(&url)).send().await?;
        Self::handle_response(response).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://catalog.test/")).unwrap();
        assert_eq!(client.url("/api/movies?page=2"), "http://catalog.test/api/movies?page=2");
        assert_eq!(client.url("auth_config"), "http://catalog.test/auth_config");
    }

    #[test]
    fn test_token_sets_bearer_header() {
        let mut client = NetworkHttpClient::new(&ClientConfig::default()).unwrap();
        assert!(client.auth_header().is_none());

        client.set_token(Some("abc.def.ghi".into()));
        assert_eq!(client.auth_header().as_deref(), Some("Bearer abc.def.ghi"));
        assert_eq!(client.token(), Some("abc.def.ghi"));

        let client = client.with_token("other");
        assert_eq!(client.token(), Some("other"));
    }
}
