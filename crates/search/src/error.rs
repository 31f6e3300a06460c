//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while loading a job catalog.
///
/// Matching and filtering themselves are infallible; only the data source
/// side of the crate produces these.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog could not be read
    #[error("Failed to read job catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog is not a valid JSON array of job records
    #[error("Invalid job catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with jobboard-core error handling.
/// Range: 10xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Catalog read failure
    CatalogIo = 10001,
    /// Catalog parse failure
    CatalogParse = 10002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::Io(_) => SearchErrorCode::CatalogIo,
            SearchError::Json(_) => SearchErrorCode::CatalogParse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_code() {
        let err: SearchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.code(), SearchErrorCode::CatalogParse);
        assert!(err.to_string().starts_with("Invalid job catalog JSON"));
    }

    #[test]
    fn test_io_error_code() {
        let err: SearchError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), SearchErrorCode::CatalogIo);
    }
}
