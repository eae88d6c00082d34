//! Shared error types

use thiserror::Error;

/// Error parsing a permission scope string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The string is not part of the permission vocabulary
    #[error("Unknown permission scope: {0}")]
    UnknownScope(String),
}

/// Error parsing a resource route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown resource route: {0}")]
pub struct RouteError(pub String);
