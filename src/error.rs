//! Error types for pricing and quotation handling.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quotation processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// File could not be read (-4)
    Io = -4,
    /// Input failed validation (E100)
    Validation = 100,
    /// Backend rejected or failed the request (E200)
    Backend = 200,
    /// Backend answered with an unexpected shape (E201)
    UnexpectedResponse = 201,
    /// Transport-level HTTP failure (E300)
    Transport = 300,
}

/// Main error type for the quotation engine.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid size label '{label}': expected <length>x<breadth>")]
    InvalidSize { label: String },

    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Missing required data for quotation: {field}")]
    MissingField { field: String },

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Quotation saved but response format unexpected")]
    UnexpectedResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Shorthand for a field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuoteError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::Json { .. } => ErrorCode::ParseError,
            QuoteError::InvalidSize { .. } => ErrorCode::ParseError,
            QuoteError::Validation { .. } => ErrorCode::Validation,
            QuoteError::MissingField { .. } => ErrorCode::Validation,
            QuoteError::Backend { .. } => ErrorCode::Backend,
            QuoteError::UnexpectedResponse => ErrorCode::UnexpectedResponse,
            QuoteError::Http(_) => ErrorCode::Transport,
            QuoteError::Serialize(_) => ErrorCode::ParseError,
            QuoteError::Io(_) => ErrorCode::Io,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for quotation operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
