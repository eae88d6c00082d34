//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend reported a failure, either with a non-2xx status or
    /// with `success: false`
    #[error("API error ({status}): {}", .description.as_deref().unwrap_or("no description"))]
    Api {
        status: u16,
        code: Option<String>,
        description: Option<String>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Access token could not be decoded
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Identity provider call failed
    #[error("Identity provider error: {0}")]
    Identity(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Structured backend error code, when the backend sent one
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Access token decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Not three dot-separated segments
    #[error("Malformed token: expected 3 segments, found {0}")]
    Malformed(usize),

    /// Payload segment is not base64url
    #[error("Token payload is not base64url: {0}")]
    Encoding(String),

    /// Payload is not a JSON object
    #[error("Token payload is not valid JSON: {0}")]
    Payload(String),

    /// `permissions` claim absent or not a list of strings
    #[error("Token has no permissions claim")]
    MissingPermissions,
}

/// Input validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Requested page is outside `1..=max(total_pages, 1)`
    #[error("Page {page} out of range (total pages: {total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },

    /// Pagination control has no such link
    #[error("No pagination link {0}")]
    NoSuchLink(String),
}
