//! Error types for the course indexer
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the course indexer
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Normalization Errors
    // ============================================================================
    #[error("Malformed course code '{code}': no leading course number")]
    MalformedCode { code: String },

    #[error("Invalid {field} '{value}' in a section of '{object_id}'")]
    InvalidSectionSize {
        object_id: String,
        field: String,
        value: String,
    },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to load auxiliary data from {path}: {message}")]
    MissingAuxiliaryData { path: String, message: String },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Index Errors
    // ============================================================================
    #[error("Upload to index '{index}' failed: {message}")]
    Upload { index: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed code error
    pub fn malformed_code(code: impl Into<String>) -> Self {
        Self::MalformedCode { code: code.into() }
    }

    /// Create an invalid section size error
    pub fn invalid_section_size(
        object_id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidSectionSize {
            object_id: object_id.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an auxiliary data error
    pub fn auxiliary(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingAuxiliaryData {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an upload error
    pub fn upload(index: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upload {
            index: index.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Whether this error aborts the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MissingAuxiliaryData { .. }
                | Error::Pattern(_)
                | Error::Config { .. }
                | Error::MissingConfigField { .. }
                | Error::InvalidUrl(_)
        )
    }
}

/// Result type alias for the course indexer
pub type Result<T> = std::result::Result<T, Error>;
