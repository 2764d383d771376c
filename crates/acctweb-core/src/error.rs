//! Error types for acctweb-core
//!
//! Every error carries the message that is shown to the user, so the web
//! layer can display it without knowing where it came from.

use crate::failure::ApiFailure;
use crate::models::AccountId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected before any request was made
    ValidationError,
    /// Backend answered with an error or could not be reached
    BackendError,
    /// No user is signed in
    NoSession,
    /// No account is selected for a transaction action
    NoAccountSelected,
    /// A transaction action named an account whose panel is no longer open
    PanelChanged,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::BackendError => write!(f, "BACKEND_ERROR"),
            ErrorCode::NoSession => write!(f, "NO_SESSION"),
            ErrorCode::NoAccountSelected => write!(f, "NO_ACCOUNT_SELECTED"),
            ErrorCode::PanelChanged => write!(f, "PANEL_CHANGED"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Expected user mistake
    Info,
    /// Operation failed, user can retry
    Warning,
    /// Operation failed for reasons outside the user's control
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for acctweb-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Backend {
        message: String,
        status: Option<u16>,
    },

    #[error("No user session")]
    NoSession,

    #[error("No account selected")]
    NoAccountSelected,

    #[error("Account {account_id} is no longer open")]
    PanelChanged { account_id: AccountId },
}

impl CoreError {
    /// Backend error with an already-normalized message
    pub fn backend(failure: &ApiFailure, message: String) -> Self {
        CoreError::Backend {
            message,
            status: failure.status,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Validation { .. } => ErrorCode::ValidationError,
            CoreError::Backend { .. } => ErrorCode::BackendError,
            CoreError::NoSession => ErrorCode::NoSession,
            CoreError::NoAccountSelected => ErrorCode::NoAccountSelected,
            CoreError::PanelChanged { .. } => ErrorCode::PanelChanged,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Validation { .. } => ErrorSeverity::Info,
            CoreError::NoAccountSelected => ErrorSeverity::Info,
            CoreError::PanelChanged { .. } => ErrorSeverity::Info,
            CoreError::NoSession => ErrorSeverity::Warning,
            CoreError::Backend { status: Some(status), .. } if *status < 500 => ErrorSeverity::Warning,
            CoreError::Backend { .. } => ErrorSeverity::Error,
        }
    }

    /// HTTP status of the backend response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Backend { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<crate::forms::ValidationError> for CoreError {
    fn from(error: crate::forms::ValidationError) -> Self {
        CoreError::Validation {
            message: error.to_string(),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Log a core error at a level matching its severity
pub fn log_error(operation: &str, error: &CoreError) {
    match error.severity() {
        ErrorSeverity::Info => log::debug!(
            target: "acctweb::error",
            "[{}] {} - Operation: {}",
            error.code(),
            error,
            operation
        ),
        ErrorSeverity::Warning => log::warn!(
            target: "acctweb::error",
            "[{}] {} - Operation: {}",
            error.code(),
            error,
            operation
        ),
        ErrorSeverity::Error => log::error!(
            target: "acctweb::error",
            "[{}] {} - Operation: {}",
            error.code(),
            error,
            operation
        ),
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::BackendError.to_string(), "BACKEND_ERROR");
        assert_eq!(ErrorCode::NoSession.to_string(), "NO_SESSION");
        assert_eq!(ErrorCode::PanelChanged.to_string(), "PANEL_CHANGED");
    }

    #[test]
    fn test_panel_changed_message() {
        let error = CoreError::PanelChanged { account_id: 7 };
        assert_eq!(error.to_string(), "Account 7 is no longer open");
        assert_eq!(error.code(), ErrorCode::PanelChanged);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let error: CoreError = ValidationError::BlankAccountName.into();
        assert_eq!(error.code(), ErrorCode::ValidationError);
        assert_eq!(error.to_string(), "Account Name must not be blank");
        assert_eq!(error.severity(), ErrorSeverity::Info);
    }

    #[test]
    fn test_backend_severity_by_status() {
        let client_side = CoreError::Backend {
            message: "Not Found".to_string(),
            status: Some(404),
        };
        assert_eq!(client_side.severity(), ErrorSeverity::Warning);
        assert_eq!(client_side.status(), Some(404));

        let server_side = CoreError::Backend {
            message: "boom".to_string(),
            status: Some(503),
        };
        assert_eq!(server_side.severity(), ErrorSeverity::Error);

        let unreachable = CoreError::Backend {
            message: "connection refused".to_string(),
            status: None,
        };
        assert_eq!(unreachable.severity(), ErrorSeverity::Error);
        assert_eq!(unreachable.status(), None);
    }
}
