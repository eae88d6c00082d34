//! Catalog Client - browser-side client for the movie/actor catalog
//!
//! Authenticates through an identity provider, pages through movies and
//! actors on the catalog backend, and drives permission-gated views.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod logger;
pub mod session;
pub mod view;
pub mod visibility;

pub use api::{ApiClient, CatalogApi};
pub use app::{CatalogApp, Detail, Screen};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, TokenError, ValidationError};
pub use http::{HttpClient, NetworkHttpClient};
pub use identity::{IdentityProvider, Navigation, StaticIdentityProvider};
pub use session::{Session, SessionChange, SessionStore};
pub use visibility::{Affordance, apply_visibility, compute_visibility};

// Re-export shared types for convenience
pub use shared::{AuthConfig, PermissionSet, Resource, Scope, UserProfile};
