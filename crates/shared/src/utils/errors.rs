use serde::Serialize;
use std::io::Error as IoError;
use thiserror::Error;
use validator::ValidationErrors;

use super::validation::{FieldErrors, field_errors};

pub const CONNECTIVITY_MESSAGE: &str = "Network error or server issue. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    #[error("{0}")]
    DomainError(String),

    #[error("Connectivity error: {0}")]
    ConnectivityError(String),

    /// Connectivity failure of a named operation, with its own retry hint.
    #[error("{message} ({detail})")]
    NetworkError { message: String, detail: String },

    #[error("Session storage error: {0}")]
    StorageError(String),

    #[error("You are not logged in")]
    Unauthenticated,

    #[error("Access denied. Admin privileges required.")]
    AccessDenied,

    #[error("A request is already in progress")]
    Busy,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Text shown to the user for this failure.
    ///
    /// Domain failures are surfaced verbatim; transport failures collapse to
    /// a generic retry hint so raw transport details never reach the screen.
    pub fn user_message(&self) -> String {
        match self {
            AppError::DomainError(msg) => msg.clone(),
            AppError::ConnectivityError(_) => CONNECTIVITY_MESSAGE.to_string(),
            AppError::NetworkError { message, .. } => message.clone(),
            AppError::ValidationError(_) => "Please fix the highlighted fields".to_string(),
            AppError::StorageError(_) => "Could not access the saved session".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            AppError::ConnectivityError(_) | AppError::NetworkError { .. }
        )
    }

    /// Swaps the generic retry hint of a connectivity failure for `message`.
    /// Any other error is returned unchanged.
    pub fn with_network_message(self, message: &str) -> Self {
        match self {
            AppError::ConnectivityError(detail) => AppError::NetworkError {
                message: message.to_string(),
                detail,
            },
            other => other,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, AppError::DomainError(_))
    }

    pub fn field_errors(&self) -> FieldErrors {
        match self {
            AppError::ValidationError(errors) => field_errors(errors),
            _ => FieldErrors::new(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(errors)
    }
}

impl From<IoError> for AppError {
    fn from(err: IoError) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
