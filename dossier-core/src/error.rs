//! Error types for Dossier operations
//!
//! Construction-time violations (length/range/pattern mismatches, missing
//! cross-field requirements) are the only errors in this model. They are
//! fatal to the construction attempt: the offending entity is never created.
//! Recoverable conditions -- a document that would exceed the token budget,
//! a context missing a required document type -- are reported as typed
//! results, never as errors.
//!
//! Each error variant carries a stable error code (e.g., `INVALID_VERSION`)
//! and a category, and can be converted to a JSON-serializable response for
//! any persistence or transport layer built on top of the model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Dossier operations
pub type Result<T> = std::result::Result<T, DossierError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input validation failed
    Validation,
    /// External collaborator (scanner, serialization) failed
    External,
}

/// Errors that can occur when constructing or validating Dossier entities
#[derive(Error, Debug)]
pub enum DossierError {
    /// Document field constraints violated (title/content bounds)
    #[error("Invalid context document: {reason}")]
    InvalidDocument { reason: String },

    /// Version string does not match the required `major.minor.patch` pattern
    #[error("Invalid version '{version}': expected a semantic version like '1.0.0'")]
    InvalidVersion { version: String },

    /// Project context constraints violated (token budget bounds)
    #[error("Invalid project context: {reason}")]
    InvalidContext { reason: String },

    /// Agent task constraints violated (description bounds)
    #[error("Invalid agent task: {reason}")]
    InvalidTask { reason: String },

    /// A duration field was negative or not a finite number
    #[error("Invalid duration: {seconds} seconds. Durations must be finite and non-negative.")]
    InvalidDuration { seconds: f64 },

    /// The directory-scanning collaborator failed
    #[error("Failed to scan '{path}': {reason}")]
    ScanError { path: String, reason: String },

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DossierError {
    /// Returns the stable error code for this error
    ///
    /// Codes are uppercase, underscore-separated identifiers that remain
    /// stable across versions, suitable for client-side handling and logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DossierError::InvalidDocument { .. } => "INVALID_DOCUMENT",
            DossierError::InvalidVersion { .. } => "INVALID_VERSION",
            DossierError::InvalidContext { .. } => "INVALID_CONTEXT",
            DossierError::InvalidTask { .. } => "INVALID_TASK",
            DossierError::InvalidDuration { .. } => "INVALID_DURATION",
            DossierError::ScanError { .. } => "SCAN_ERROR",
            DossierError::JsonError(_) => "JSON_ERROR",
        }
    }

    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            DossierError::InvalidDocument { .. }
            | DossierError::InvalidVersion { .. }
            | DossierError::InvalidContext { .. }
            | DossierError::InvalidTask { .. }
            | DossierError::InvalidDuration { .. } => ErrorCategory::Validation,

            DossierError::ScanError { .. } | DossierError::JsonError(_) => ErrorCategory::External,
        }
    }

    /// Converts this error to a JSON-serializable response object
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                category: self.category(),
            },
        }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail for JSON responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code (e.g., "INVALID_VERSION")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category
    pub category: ErrorCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DossierError::InvalidVersion {
                version: "v1.0".to_string()
            }
            .error_code(),
            "INVALID_VERSION"
        );
        assert_eq!(
            DossierError::InvalidDocument {
                reason: "title too long".to_string()
            }
            .error_code(),
            "INVALID_DOCUMENT"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            DossierError::InvalidTask {
                reason: "empty".to_string()
            }
            .category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DossierError::ScanError {
                path: "/docs".to_string(),
                reason: "denied".to_string()
            }
            .category(),
            ErrorCategory::External
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let err = DossierError::InvalidVersion {
            version: "1.0".to_string(),
        };
        let response = err.to_error_response();

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_VERSION"));
        assert!(json.contains("validation"));

        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.error.code, "INVALID_VERSION");
    }

    #[test]
    fn test_error_messages_are_helpful() {
        let err = DossierError::InvalidVersion {
            version: "v2.1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("v2.1"));
        assert!(msg.contains("1.0.0"));
    }
}
