//! Error handling for the Procurement Admin Platform
//!
//! Every error here is local-recoverable: the UI shell re-prompts the user
//! with an inline field-level message built from [`ErrorDetail`].

use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Invalid delivery chain: {0}")]
    InvalidChain(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Error payload handed to the UI shell for inline display
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Stable machine-readable code for the UI shell
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::DuplicateEntry(_) => "DUPLICATE_ENTRY",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidChain(_) => "INVALID_CHAIN",
            AppError::EmptyInput(_) => "EMPTY_INPUT",
            AppError::InvalidStateTransition(_) => "INVALID_STATE_TRANSITION",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Build the detail payload shown next to the offending form field
    pub fn detail(&self) -> ErrorDetail {
        let field = match self {
            AppError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };
        let message = match self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::NotFound(resource) => format!("{} not found", resource),
            AppError::DuplicateEntry(what) => format!("A record with this {} already exists", what),
            AppError::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        ErrorDetail {
            code: self.code().to_string(),
            message,
            field,
        }
    }

    /// Shortcut for a field-level validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for service operations
pub type AppResult<T> = Result<T, AppError>;
