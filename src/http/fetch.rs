//! Fetch primitive abstraction

use crate::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

/// A single HTTP request as seen by the fetch primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Fully built URL, query string included
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Timeout for this request (zero = no timeout)
    pub timeout: Duration,
}

impl FetchRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            timeout,
        }
    }
}

/// Performs one request and returns the parsed JSON body
///
/// Implementations must not retry; a failure is reported as-is.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Execute the request
    async fn fetch(&self, request: FetchRequest) -> Result<Value>;
}
