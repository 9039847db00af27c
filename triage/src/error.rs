//! Triage error types
//!
//! The scoring functions never fail. These errors cover the parts around
//! them: loading category catalogs, reading configuration and validating
//! complaint input before analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for triage operations
pub type TriageResult<T> = Result<T, TriageError>;

/// Errors that can occur outside the pure scoring functions
#[derive(Error, Debug)]
pub enum TriageError {
    /// Category catalog file not found
    #[error("Category catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Category catalog parsed but its contents are unusable
    #[error("Invalid category catalog: {message}")]
    InvalidCatalog { message: String },

    /// File extension not recognised as a catalog format
    #[error("Unsupported catalog format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Validation error (for invalid input parameters)
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TriageError {
    /// Create a catalog not found error
    pub fn catalog_not_found(path: impl Into<PathBuf>) -> Self {
        Self::CatalogNotFound { path: path.into() }
    }

    /// Create an invalid catalog error
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            message: message.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Machine-readable code for reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::CatalogNotFound { .. } => "CATALOG_NOT_FOUND",
            Self::InvalidCatalog { .. } => "CATALOG_INVALID",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_PARSE_ERROR",
            Self::Toml(_) => "TOML_PARSE_ERROR",
        }
    }

    /// Get recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CatalogNotFound { .. } => Some(
                "Check the --categories path or TRIAGE_CATEGORIES_PATH. Omit both to use the \
                 built-in campus catalog.",
            ),
            Self::InvalidCatalog { .. } => Some(
                "Every category needs a unique id and a name. Ids must not repeat.",
            ),
            Self::UnsupportedFormat { .. } => {
                Some("Save the catalog as a JSON array (.json) or a [[categories]] table (.toml).")
            }
            Self::ConfigError { .. } => Some(
                "Check the config file keys and TRIAGE_* environment variables. \
                 TRIAGE_OUTPUT_FORMAT accepts 'text' or 'json'.",
            ),
            Self::ValidationError { .. } => {
                Some("Provide a non-empty title and description and try again.")
            }
            Self::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    Some("File or directory not found. Check the path exists.")
                }
                std::io::ErrorKind::PermissionDenied => {
                    Some("Permission denied. Check file permissions: ls -la <path>")
                }
                _ => Some("IO error occurred. Check the path and file permissions."),
            },
            Self::Json(_) => Some(
                "JSON parsing failed. Validate JSON syntax: python -m json.tool < file.json",
            ),
            Self::Toml(_) => None,
        }
    }

    /// Get error with recovery suggestion formatted
    pub fn with_suggestion(&self) -> String {
        match self.recovery_suggestion() {
            Some(suggestion) => format!("{}\n\nRecovery: {}", self, suggestion),
            None => self.to_string(),
        }
    }
}
