//! Client-related types
//!
//! Identity-provider configuration served by the backend and the user
//! profile returned by the provider.

use serde::{Deserialize, Serialize};

/// `GET /auth_config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Identity provider tenant domain, e.g. `example.eu.auth0.com`
    pub domain: String,
    pub client_id: String,
    /// API identifier the access token is issued for
    pub audience: String,
}

/// User profile from the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            picture: None,
        }
    }
}
