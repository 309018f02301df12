//! Error types for trade-pager
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for trade-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// A page fetch used up its whole retry budget
    #[error("Fetch failed after {attempts} attempt(s): {source}")]
    FetchFailed {
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
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

    /// Wrap the last attempt's error once the retry budget is spent
    pub fn fetch_failed(attempts: u32, source: Error) -> Self {
        Self::FetchFailed {
            attempts,
            source: Box::new(source),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Error::InvalidConfigValue { .. } | Error::YamlParse(_))
    }

    /// Check if this error came out of an exhausted retry budget
    pub fn is_fetch_failed(&self) -> bool {
        matches!(self, Error::FetchFailed { .. })
    }
}

/// Result type alias for trade-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_value("inter_page_delay_ms", "must be at least 200");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'inter_page_delay_ms': must be at least 200"
        );

        let err = Error::http_status(503, "Service Unavailable");
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_fetch_failed_keeps_source() {
        let err = Error::fetch_failed(4, Error::Timeout { timeout_ms: 1000 });
        assert!(err.is_fetch_failed());
        assert_eq!(
            err.to_string(),
            "Fetch failed after 4 attempt(s): Request timeout after 1000ms"
        );

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Request timeout after 1000ms");
    }

    #[test]
    fn test_is_config() {
        assert!(Error::invalid_value("max_retries", "zero").is_config());
        assert!(!Error::Timeout { timeout_ms: 10 }.is_config());
        assert!(!Error::fetch_failed(1, Error::http_status(500, "")).is_config());
    }

    #[test]
    fn test_result_with_context_from_io() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result
            .with_context(|| "Failed to read pager.yaml".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to read pager.yaml: IO error: missing");
    }
}
