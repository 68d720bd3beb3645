//! Transient user notifications (toasts) produced by card actions.

use serde::{Deserialize, Serialize};

pub const LOGIN_REQUIRED: &str = "You need to login to create a Wishlist";
pub const WISHLIST_ADDED: &str = "Item has been added to wishlist";
pub const WISHLIST_EXISTS: &str = "This Item already exists on your wishlist";
pub const WISHLIST_FAILED: &str = "Something went wrong (500)";
pub const COMPARE_ADDED: &str = "Item has been added to compare list";
pub const COMPARE_EXISTS: &str = "This Item already exists on your compare list";

/// Notice severity, mapped to toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Lowercase name used as a CSS modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A message shown to the user once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
