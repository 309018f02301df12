//! Cursor-advancing page stream

use super::retry::RetryExecutor;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::http::Fetch;
use crate::types::{last_cursor, Page, PageRequest};
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::{debug, info};

/// Lazily produced sequence of pages
pub type PageStream<'a> = BoxStream<'a, Result<Page>>;

/// Where the stream stands between two pulls
enum Step {
    /// Nothing fetched yet
    Start(PageRequest),
    /// A page was yielded; wait out the inter-page delay before this request
    Next(PageRequest),
}

/// Walks a `tid`-cursored feed page by page
///
/// Pages are fetched only when the stream is polled, one at a time, through
/// a [`RetryExecutor`]. Dropping the stream cancels any pending delay or
/// request.
#[derive(Debug)]
pub struct Paginator<F> {
    executor: RetryExecutor<F>,
}

impl<F: Fetch> Paginator<F> {
    /// Create a paginator over `fetcher`
    pub fn new(fetcher: F, config: FetchConfig) -> Self {
        Self::from_executor(RetryExecutor::new(fetcher, config))
    }

    /// Create a paginator around an existing executor
    pub fn from_executor(executor: RetryExecutor<F>) -> Self {
        Self { executor }
    }

    /// Get the retry executor
    pub fn executor(&self) -> &RetryExecutor<F> {
        &self.executor
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        self.executor.config()
    }

    /// Stream every page of `base_url`, starting after `start_cursor`
    ///
    /// Each pull fetches one page and moves the cursor to that page's last
    /// `tid`. The stream ends without yielding the first page whose cursor
    /// is 0. A fetch that exhausts its retry budget is yielded as an error
    /// and ends the stream.
    pub fn paginate(&self, base_url: impl Into<String>, start_cursor: u64) -> PageStream<'_> {
        let start = Step::Start(PageRequest::new(base_url, start_cursor));

        stream::try_unfold(start, move |step| self.advance(step)).boxed()
    }

    /// Run one pull: optional delay, one fetch, then decide whether to go on
    async fn advance(&self, step: Step) -> Result<Option<(Page, Step)>> {
        let request = match step {
            Step::Start(request) => request,
            Step::Next(request) => {
                tokio::time::sleep(self.config().inter_page_delay()).await;
                request
            }
        };

        let page = self.executor.fetch_with_retry(&request).await?;
        let last_id = last_cursor(&page);

        if last_id == 0 {
            info!("No more pages after tid={}", request.cursor);
            return Ok(None);
        }

        debug!(
            "Page at tid={} has {} item(s), next cursor {}",
            request.cursor,
            page.len(),
            last_id
        );
        Ok(Some((page, Step::Next(request.advance(last_id)))))
    }

    /// Fetch every page into memory, stopping at the first error
    pub async fn collect_all(
        &self,
        base_url: impl Into<String>,
        start_cursor: u64,
    ) -> Result<Vec<Page>> {
        self.paginate(base_url, start_cursor).try_collect().await
    }
}
