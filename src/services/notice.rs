//! User-facing notices
//!
//! Every recoverable failure ends up as a dismissable notice rather than a
//! crash. The host decides how to show them.

use std::fmt;

use crate::auth::AuthOutcome;
use crate::error::BilleteraError;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Get the icon/prefix for this level
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A dismissable message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    /// Shown when the device has no biometric hardware
    pub fn biometrics_unavailable() -> Self {
        Self::warning(
            "Biometrics unavailable",
            "This device does not support biometric authentication. You can continue without it.",
        )
    }

    /// Shown after an unsuccessful gate attempt, if any
    pub fn for_outcome(outcome: AuthOutcome) -> Option<Self> {
        match outcome {
            AuthOutcome::Granted => None,
            AuthOutcome::Failed => Some(Self::error(
                "Authentication failed",
                "Authentication failed. Please try again.",
            )),
            AuthOutcome::NotEnrolled => Some(Self::warning(
                "No biometrics enrolled",
                "Set up a fingerprint or face in your device settings, or continue without biometrics.",
            )),
        }
    }
}

impl From<&BilleteraError> for Notice {
    fn from(err: &BilleteraError) -> Self {
        match err {
            BilleteraError::Validation(_)
            | BilleteraError::InvalidAmount(_)
            | BilleteraError::AmountOutOfRange(_) => {
                Self::error("Invalid input", err.to_string())
            }
            BilleteraError::StorageUnavailable(_) => Self::warning(
                "Storage unavailable",
                format!("Your expenses could not be saved or loaded. {}", err),
            ),
            BilleteraError::AuthenticationFailed(_)
            | BilleteraError::NotEnrolled
            | BilleteraError::AccessDenied(_) => Self::error("Authentication", err.to_string()),
            _ => Self::error("Error", err.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level.icon(), self.title, self.message)
    }
}
