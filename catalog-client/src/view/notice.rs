//! User-visible outcomes of a flow
//!
//! Every failure collapses into one of two shapes at the UI boundary: a
//! dismissible toast, or an inline invalidation of one form field.

use std::fmt;

use serde::Serialize;

pub const SUCCESS_HEADER: &str = "✔ SUCCESS";
pub const ERROR_HEADER: &str = "✘ ERROR";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred!";

/// Toast styling category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastCategory {
    Success,
    Danger,
}

/// Something to show the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Toast {
        category: ToastCategory,
        header: String,
        message: String,
    },
    /// The named form field is marked invalid; the form stays open
    FieldInvalid { field: String },
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Toast {
            category: ToastCategory::Success,
            header: SUCCESS_HEADER.to_string(),
            message: message.into(),
        }
    }

    /// The generic error toast
    pub fn unknown_error() -> Self {
        Self::Toast {
            category: ToastCategory::Danger,
            header: ERROR_HEADER.to_string(),
            message: UNKNOWN_ERROR.to_string(),
        }
    }

    pub fn field_invalid(field: impl Into<String>) -> Self {
        Self::FieldInvalid {
            field: field.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(
            self,
            Self::Toast {
                category: ToastCategory::Success,
                ..
            }
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toast {
                header, message, ..
            } => write!(f, "{header}: {message}"),
            Self::FieldInvalid { field } => write!(f, "invalid field: {field}"),
        }
    }
}
