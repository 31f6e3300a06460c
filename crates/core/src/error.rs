//! Error handling with codes, context and recovery suggestions
//!
//! Every failure surfaced by the jobboard binary carries an [`ErrorCode`]
//! that decides both the `E####` tag shown to the user and the process
//! exit code.

#![allow(missing_docs)]

use jobboard_search::SearchError;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // General errors (1xxx)
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    InvalidConfigValue = 3004,

    // Job data errors (4xxx)
    DataError = 4000,
    CatalogNotFound = 4001,
    CatalogParseError = 4002,

    // Input errors (5xxx)
    InvalidInput = 5001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            4 => exit_codes::DATA_ERROR,
            5 => exit_codes::VALIDATION_ERROR,
            _ => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .jobboard.toml file or use --config to specify a path")
    }

    pub fn invalid_config_value(key: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfigValue,
            format!("Invalid value for {}: {}", key, message.into()),
        )
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Convert a failed catalog load from `path`
    pub fn catalog(err: SearchError, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().display();
        let error = match &err {
            SearchError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => Self::new(
                ErrorCode::CatalogNotFound,
                format!("Job data not found: {}", path),
            )
            .with_suggestion("Pass --data <PATH> or set [data] path in .jobboard.toml"),
            SearchError::Io(_) => {
                Self::new(ErrorCode::DataError, format!("Failed to read {}: {}", path, err))
            }
            SearchError::Json(_) => Self::new(
                ErrorCode::CatalogParseError,
                format!("Invalid job data in {}: {}", path, err),
            )
            .with_suggestion("The job data must be a JSON array of job objects"),
        };
        error.with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const FAILURE: u8 = 1;
    pub const VALIDATION_ERROR: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
    pub const DATA_ERROR: u8 = 4;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::CatalogParseError.to_string(), "E4002");
    }

    #[test]
    fn test_error_code_exit_code() {
        assert_eq!(ErrorCode::ConfigParseError.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(ErrorCode::CatalogNotFound.exit_code(), exit_codes::DATA_ERROR);
        assert_eq!(ErrorCode::InvalidInput.exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(ErrorCode::IoError.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_error_display_with_context() {
        let err = Error::config_not_found("/etc/jobboard.toml").with_context("While starting");
        let text = err.to_string();

        assert!(text.starts_with("[E3001] Configuration file not found: /etc/jobboard.toml"));
        assert!(text.contains("Context: While starting"));
        assert!(text.contains("Suggestion: "));
    }

    #[test]
    fn test_catalog_not_found_names_path() {
        let missing = SearchError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = Error::catalog(missing, "/data/jobs.json");

        assert_eq!(err.code, ErrorCode::CatalogNotFound);
        assert!(err.message.contains("/data/jobs.json"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_catalog_parse_error() {
        let json = SearchError::Json(serde_json::from_str::<Vec<u8>>("[").unwrap_err());
        let err = Error::catalog(json, "jobs.json");

        assert_eq!(err.code, ErrorCode::CatalogParseError);
        assert!(err.suggestion.is_some());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_catalog_read_error() {
        let denied =
            SearchError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no"));
        assert_eq!(Error::catalog(denied, "jobs.json").code, ErrorCode::DataError);
    }

    #[test]
    fn test_io_error_conversion() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_result_ext() {
        let result: Result<()> = Err(Error::invalid_input("bad salary"));
        let err = result.context("While parsing --min-salary").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("While parsing --min-salary"));
    }
}
