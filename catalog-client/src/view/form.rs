//! Form handling shared by the movie and actor views

use shared::response::codes;

use crate::ClientError;
use crate::view::notice::Notice;

/// Split a cross-reference textarea into names.
///
/// Tokens are separated by newlines or commas, trimmed, and empty ones
/// dropped; order is kept.
pub fn parse_reference_list(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Result of submitting a create or update form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Saved; close the modal and reload `reload_page`
    Saved { notice: Notice, reload_page: u32 },
    /// A field was rejected; the form stays open
    Invalid(Notice),
    /// Any other failure
    Failed(Notice),
}

impl FormOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    pub fn notice(&self) -> &Notice {
        match self {
            Self::Saved { notice, .. } | Self::Invalid(notice) | Self::Failed(notice) => notice,
        }
    }
}

/// Map a failed create/update to what the user sees.
///
/// Only a structured `bad_request` or `unprocessable_entity` code blames
/// the cross-reference field, since the backend resolves referenced names
/// under those codes.
pub fn submit_failure(err: &ClientError, reference_field: &str) -> FormOutcome {
    match err.api_code() {
        Some(codes::BAD_REQUEST | codes::UNPROCESSABLE_ENTITY) => {
            FormOutcome::Invalid(Notice::field_invalid(reference_field))
        }
        _ => FormOutcome::Failed(Notice::unknown_error()),
    }
}
