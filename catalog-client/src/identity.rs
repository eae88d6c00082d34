//! Identity provider seam
//!
//! The hosted provider (authorization-code flow with redirects) is an
//! external capability. The client only relies on the calls below.

use async_trait::async_trait;
use reqwest::Url;
use shared::client::{AuthConfig, UserProfile};

use crate::{ClientError, ClientResult};

/// Options for starting a login redirect
#[derive(Debug, Clone)]
pub struct RedirectOptions {
    pub redirect_uri: String,
}

/// Options for logging out at the provider
#[derive(Debug, Clone)]
pub struct LogoutOptions {
    pub return_to: String,
}

/// A full-page navigation the host must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

/// Identity provider capability set
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn is_authenticated(&self) -> ClientResult<bool>;
    /// Current access token, refreshed by the provider when needed
    async fn get_token_silently(&self) -> ClientResult<String>;
    async fn get_user(&self) -> ClientResult<UserProfile>;
    async fn login_with_redirect(&self, opts: &RedirectOptions) -> ClientResult<Navigation>;
    async fn logout(&mut self, opts: &LogoutOptions) -> ClientResult<Navigation>;
    /// Exchange the `code`/`state` carried by `url` for a session
    async fn handle_redirect_callback(&mut self, url: &str) -> ClientResult<()>;
}

/// True when `url` carries both `code` and `state` query parameters
pub fn has_redirect_params(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url).or_else(|_| Url::parse("http://localhost")?.join(url)) else {
        return false;
    };
    let mut code = false;
    let mut state = false;
    for (key, _) in parsed.query_pairs() {
        match key.as_ref() {
            "code" => code = true,
            "state" => state = true,
            _ => {}
        }
    }
    code && state
}

/// Provider backed by a pre-issued access token.
///
/// Builds the same authorize/logout URLs a hosted provider would. A token
/// registered with [`StaticIdentityProvider::with_pending_login`] becomes
/// the session once a redirect callback is handled.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    config: AuthConfig,
    session: Option<(String, UserProfile)>,
    pending: Option<(String, UserProfile)>,
}

impl StaticIdentityProvider {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            session: None,
            pending: None,
        }
    }

    /// Start out logged in
    pub fn with_session(mut self, token: impl Into<String>, user: UserProfile) -> Self {
        self.session = Some((token.into(), user));
        self
    }

    /// Log in once the redirect callback arrives
    pub fn with_pending_login(mut self, token: impl Into<String>, user: UserProfile) -> Self {
        self.pending = Some((token.into(), user));
        self
    }

    fn provider_url(&self, path: &str, params: &[(&str, &str)]) -> ClientResult<Url> {
        let base = format!("https://{}/{}", self.config.domain, path);
        Url::parse_with_params(&base, params)
            .map_err(|e| ClientError::Config(format!("invalid provider domain: {e}")))
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn is_authenticated(&self) -> ClientResult<bool> {
        Ok(self.session.is_some())
    }

    async fn get_token_silently(&self) -> ClientResult<String> {
        self.session
            .as_ref()
            .map(|(token, _)| token.clone())
            .ok_or(ClientError::Unauthorized)
    }

    async fn get_user(&self) -> ClientResult<UserProfile> {
        self.session
            .as_ref()
            .map(|(_, user)| user.clone())
            .ok_or(ClientError::Unauthorized)
    }

    async fn login_with_redirect(&self, opts: &RedirectOptions) -> ClientResult<Navigation> {
        let url = self.provider_url(
            "authorize",
            &[
                ("response_type", "code"),
                ("client_id", &self.config.client_id),
                ("audience", &self.config.audience),
                ("redirect_uri", &opts.redirect_uri),
            ],
        )?;
        Ok(Navigation { url: url.into() })
    }

    async fn logout(&mut self, opts: &LogoutOptions) -> ClientResult<Navigation> {
        self.session = None;
        let url = self.provider_url(
            "v2/logout",
            &[
                ("client_id", &self.config.client_id),
                ("returnTo", &opts.return_to),
            ],
        )?;
        Ok(Navigation { url: url.into() })
    }

    async fn handle_redirect_callback(&mut self, url: &str) -> ClientResult<()> {
        if !has_redirect_params(url) {
            return Err(ClientError::Identity(
                "redirect callback without code and state".into(),
            ));
        }
        let pending = self
            .pending
            .take()
            .ok_or_else(|| ClientError::Identity("no login in progress".into()))?;
        self.session = Some(pending);
        Ok(())
    }
}
