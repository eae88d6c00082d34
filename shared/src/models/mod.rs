//! Data models
//!
//! Records as returned by the catalog backend and the payloads sent to
//! create or update them. All IDs are `i64`.

pub mod actor;
pub mod movie;

// Re-exports
pub use actor::*;
pub use movie::*;

use serde::{Deserialize, Deserializer};

/// Blank form text becomes `None` (sent as JSON `null`)
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Optional text field; empty strings and the literal `"None"` the backend
/// emits for a missing date are read as absent.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty() && s != "None"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" Heat "), Some("Heat".to_string()));
    }
}
