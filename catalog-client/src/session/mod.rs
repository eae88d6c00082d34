//! Session/permission store
//!
//! Holds the bearer token, the decoded permission set and the user profile.
//! [`SessionStore`] is the only writer; views read the [`Session`] by
//! reference.

mod token;

pub use token::{decode_claims, decode_permissions, expires_at};

use chrono::{DateTime, Utc};
use shared::{PermissionSet, Scope, UserProfile};

use crate::ClientResult;
use crate::error::TokenError;
use crate::identity::{
    IdentityProvider, LogoutOptions, Navigation, RedirectOptions, has_redirect_params,
};
use crate::view::notice::Notice;

/// Toast shown once the local session is gone
pub const LOGGED_OUT_MESSAGE: &str = "Successfully logged out!";

/// Current authentication state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: Option<String>,
    permissions: PermissionSet,
    user: Option<UserProfile>,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Logged out: no token, `{no:perms}`
    pub fn anonymous() -> Self {
        Self {
            token: None,
            permissions: PermissionSet::none(),
            user: None,
            expires_at: None,
        }
    }

    /// Logged in; permissions are decoded from `token`
    pub fn authenticated(token: impl Into<String>, user: UserProfile) -> Result<Self, TokenError> {
        let token = token.into();
        let permissions = decode_permissions(&token)?;
        Ok(Self {
            expires_at: expires_at(&token),
            token: Some(token),
            permissions,
            user: Some(user),
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Token expiry, when the token carries `exp`
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Name shown in the navbar; empty when logged out
    pub fn username(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn can(&self, scope: Scope) -> bool {
        self.permissions.contains(scope)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// What changed after [`SessionStore::initialize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionChange {
    pub authenticated: bool,
    pub username: String,
    /// URL to `replace_state` with, dropping the callback parameters
    pub rewrite_url: Option<String>,
}

/// Single writer of the [`Session`]
pub struct SessionStore<P> {
    provider: P,
    session: Session,
}

impl<P: IdentityProvider> SessionStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            session: Session::anonymous(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Sync the session with the identity provider.
    ///
    /// When `current_url` carries `code` and `state` and nobody is logged
    /// in yet, the redirect callback is exchanged first.
    pub async fn initialize(&mut self, current_url: &str) -> ClientResult<SessionChange> {
        let mut rewrite_url = None;

        let mut authenticated = self.provider.is_authenticated().await?;
        if authenticated {
            rewrite_url = Some("/".to_string());
        } else if has_redirect_params(current_url) {
            tracing::debug!("Handling identity provider redirect callback");
            self.provider.handle_redirect_callback(current_url).await?;
            rewrite_url = Some("/".to_string());
            authenticated = self.provider.is_authenticated().await?;
        }

        if !authenticated {
            self.session = Session::anonymous();
            return Ok(SessionChange {
                authenticated: false,
                username: String::new(),
                rewrite_url,
            });
        }

        let token = self.provider.get_token_silently().await?;
        let user = self.provider.get_user().await?;
        match Session::authenticated(token, user) {
            Ok(session) => {
                tracing::debug!(
                    user = %session.username(),
                    scopes = session.permissions().len(),
                    expires_at = ?session.expires_at(),
                    "Session established"
                );
                self.session = session;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding session with undecodable token");
                self.session = Session::anonymous();
                return Err(e.into());
            }
        }

        Ok(SessionChange {
            authenticated: true,
            username: self.session.username().to_string(),
            rewrite_url,
        })
    }

    /// Start the provider login; the host must follow the navigation
    pub async fn login(&self, redirect_uri: &str) -> ClientResult<Navigation> {
        self.provider
            .login_with_redirect(&RedirectOptions {
                redirect_uri: redirect_uri.to_string(),
            })
            .await
    }

    /// Drop the local session, then log out at the provider.
    ///
    /// Provider failures are logged and swallowed; the local session is
    /// gone either way.
    pub async fn logout(&mut self, return_to: &str) -> (Notice, Option<Navigation>) {
        self.session = Session::anonymous();
        let notice = Notice::success(LOGGED_OUT_MESSAGE);

        let opts = LogoutOptions {
            return_to: return_to.to_string(),
        };
        match self.provider.logout(&opts).await {
            Ok(nav) => (notice, Some(nav)),
            Err(e) => {
                tracing::warn!(error = %e, "Provider logout failed");
                (notice, None)
            }
        }
    }
}
