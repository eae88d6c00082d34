//! Shared types for the catalog client
//!
//! Wire types of the movies/actors backend, the permission vocabulary
//! carried in access tokens, and pagination math used by every listing.

pub mod client;
pub mod error;
pub mod models;
pub mod permission;
pub mod resource;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{RouteError, ScopeError};
pub use models::{Actor, ActorPayload, ActorRef, Gender, Movie, MoviePayload, MovieRef};
pub use permission::{PermissionSet, Scope};
pub use client::{AuthConfig, UserProfile};
pub use resource::Resource;
pub use response::{ApiErrorBody, PAGE_SIZE, Pagination, total_pages};
