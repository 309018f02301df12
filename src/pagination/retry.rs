//! Bounded retry around a single page fetch

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::http::{Fetch, FetchRequest};
use crate::types::{decode_page, Page, PageRequest};
use tracing::{debug, error, warn};

/// Fetches one page, retrying failed attempts after a fixed delay
///
/// Attempts are numbered from 1 and the budget check runs before the
/// counter moves, so a page gets exactly `max_retries` attempts in total.
#[derive(Debug)]
pub struct RetryExecutor<F> {
    fetcher: F,
    config: FetchConfig,
}

impl<F: Fetch> RetryExecutor<F> {
    /// Create a new executor
    pub fn new(fetcher: F, config: FetchConfig) -> Self {
        Self { fetcher, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the page identified by `request`
    ///
    /// Only a failed fetch counts as a failed attempt; any body the
    /// primitive returns is decoded and handed back at once. Once the budget
    /// is spent the last error is returned wrapped in [`Error::FetchFailed`].
    pub async fn fetch_with_retry(&self, request: &PageRequest) -> Result<Page> {
        let url = request.url();
        let max_retries = self.config.max_retries();
        let mut attempt: u32 = 1;

        loop {
            let fetch_request = FetchRequest::get(url.as_str(), self.config.request_timeout());
            let result = self.fetcher.fetch(fetch_request).await.map(decode_page);

            match result {
                Ok(page) => {
                    debug!(
                        "Fetched {} item(s) from {} on attempt {}",
                        page.len(),
                        url,
                        attempt
                    );
                    return Ok(page);
                }
                Err(e) if attempt == max_retries => {
                    error!("[{}] max retries reached for {}: {}", attempt, url, e);
                    return Err(Error::fetch_failed(attempt, e));
                }
                Err(e) => {
                    let delay = self.config.retry_delay();
                    warn!(
                        "[{}] an error: [{}] has happened! trying again in {:?}",
                        attempt, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
