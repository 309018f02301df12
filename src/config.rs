//! Fetch configuration
//!
//! `FetchConfig` holds the retry and throttling settings for one paginator.
//! It is validated when built and cannot be changed afterwards.
//!
//! Config files are YAML (plain JSON is accepted too):
//!
//! ```yaml
//! max_retries: 4
//! retry_delay_ms: 1000
//! request_timeout_ms: 1000
//! inter_page_delay_ms: 200
//! ```

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Smallest allowed pause between two pages
pub const MIN_INTER_PAGE_DELAY: Duration = Duration::from_millis(200);

const DEFAULT_MAX_RETRIES: u32 = 4;
const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;
const DEFAULT_INTER_PAGE_DELAY_MS: u64 = 200;

// ============================================================================
// FetchConfig
// ============================================================================

/// Retry and throttling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    max_retries: u32,
    retry_delay: Duration,
    request_timeout: Duration,
    inter_page_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            inter_page_delay: Duration::from_millis(DEFAULT_INTER_PAGE_DELAY_MS),
        }
    }
}

impl FetchConfig {
    /// Create a validated config
    pub fn new(
        max_retries: u32,
        retry_delay: Duration,
        request_timeout: Duration,
        inter_page_delay: Duration,
    ) -> Result<Self> {
        let config = Self {
            max_retries,
            retry_delay,
            request_timeout,
            inter_page_delay,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a new config builder, starting from the defaults
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Load a config from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        FetchConfigFile::from_file(path)?.try_into()
    }

    /// Parse a config from YAML (or JSON) text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        FetchConfigFile::from_yaml_str(content)?.try_into()
    }

    /// Total attempts allowed for one page fetch
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Pause between two attempts of the same page
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Timeout of a single attempt (zero disables it)
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Pause between two yielded pages
    pub fn inter_page_delay(&self) -> Duration {
        self.inter_page_delay
    }

    fn validate(&self) -> Result<()> {
        if self.max_retries == 0 {
            return Err(Error::invalid_value(
                "max_retries",
                "at least one attempt is required",
            ));
        }
        if self.inter_page_delay < MIN_INTER_PAGE_DELAY {
            return Err(Error::invalid_value(
                "inter_page_delay_ms",
                format!(
                    "must be at least {}ms, got {}ms",
                    MIN_INTER_PAGE_DELAY.as_millis(),
                    self.inter_page_delay.as_millis()
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`FetchConfig`]
#[derive(Debug, Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    /// Set max attempts per page
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the pause between attempts
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.config.retry_delay = delay;
        self
    }

    /// Set the per-attempt timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the pause between pages
    pub fn inter_page_delay(mut self, delay: Duration) -> Self {
        self.config.inter_page_delay = delay;
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<FetchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// ============================================================================
// File Format
// ============================================================================

/// On-disk representation, delays in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfigFile {
    /// Total attempts per page
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Pause between attempts
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Per-attempt timeout (0 = none)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Pause between pages
    #[serde(default = "default_inter_page_delay_ms")]
    pub inter_page_delay_ms: u64,
}

impl FetchConfigFile {
    /// Read a config file without validating it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML (or JSON) text without validating it
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_inter_page_delay_ms() -> u64 {
    DEFAULT_INTER_PAGE_DELAY_MS
}

impl Default for FetchConfigFile {
    fn default() -> Self {
        FetchConfig::default().into()
    }
}

impl TryFrom<FetchConfigFile> for FetchConfig {
    type Error = Error;

    fn try_from(file: FetchConfigFile) -> Result<Self> {
        FetchConfig::new(
            file.max_retries,
            Duration::from_millis(file.retry_delay_ms),
            Duration::from_millis(file.request_timeout_ms),
            Duration::from_millis(file.inter_page_delay_ms),
        )
    }
}

impl From<FetchConfig> for FetchConfigFile {
    fn from(config: FetchConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay.as_millis() as u64,
            request_timeout_ms: config.request_timeout.as_millis() as u64,
            inter_page_delay_ms: config.inter_page_delay.as_millis() as u64,
        }
    }
}
