//! # Error Types
//!
//! Structured error types for elf_core. Every variant carries enough context
//! for a caller (human or program) to see which input was rejected and why.
//!
//! ## Example
//!
//! ```rust
//! use elf_core::errors::{CalcError, CalcResult};
//!
//! fn validate_importance(ie: f64) -> CalcResult<()> {
//!     if ie <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "importance_factor".to_string(),
//!             value: ie.to_string(),
//!             reason: "Importance factor must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for elf_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
///
/// Serializes with a `type`/`details` tag so the CLI can emit errors as JSON.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (malformed number, wrong length, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The building geometry cannot produce a finite period (e.g. no stories)
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },

    /// No hazard record for the requested location
    #[error("Hazard site not found: {province} / {district}")]
    HazardSiteNotFound { province: String, district: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(reason: impl Into<String>) -> Self {
        CalcError::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    /// Create a HazardSiteNotFound error
    pub fn hazard_site_not_found(province: impl Into<String>, district: impl Into<String>) -> Self {
        CalcError::HazardSiteNotFound {
            province: province.into(),
            district: district.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::DegenerateGeometry { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::HazardSiteNotFound { .. } => "HAZARD_SITE_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("story_heights", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("ss").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::degenerate_geometry("no stories").error_code(),
            "DEGENERATE_GEOMETRY"
        );
        assert_eq!(
            CalcError::hazard_site_not_found("A", "B").error_code(),
            "HAZARD_SITE_NOT_FOUND"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::degenerate_geometry("zero height").is_input_error());
        assert!(!CalcError::file_error("open", "x.json", "denied").is_input_error());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::degenerate_geometry("total height is zero");
        assert_eq!(error.to_string(), "Degenerate geometry: total height is zero");
    }
}
