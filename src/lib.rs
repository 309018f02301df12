//! # trade-pager
//!
//! Walks a cursor-paginated trade history feed one page at a time.
//!
//! ## Features
//!
//! - **Lazy pagination**: pages are fetched only when the stream is polled
//! - **Cursor tracking**: each request starts after the last `tid` seen
//! - **Bounded retry**: a fixed number of attempts per page, fixed delay between them
//! - **Throttling**: fixed pause between consecutive pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use trade_pager::{FetchConfig, HttpFetcher, Paginator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let paginator = Paginator::new(HttpFetcher::new()?, FetchConfig::default());
//!
//!     let mut pages = paginator.paginate("https://www.mercadobitcoin.net/api/BTC/trades/", 5700);
//!     while let Some(page) = pages.next().await {
//!         println!("{} trades", page?.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ Paginator      paginate() → Stream<Page>      │
//! │                cursor := last tid, throttle   │
//! └───────────────────────┬───────────────────────┘
//! ┌───────────────────────┴───────────────────────┐
//! │ RetryExecutor  fetch_with_retry() → Page      │
//! │                bounded attempts, fixed delay  │
//! └───────────────────────┬───────────────────────┘
//! ┌───────────────────────┴───────────────────────┐
//! │ Fetch          one GET + timeout → JSON       │
//! └───────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pages, page items and page requests
pub mod types;

/// Fetch configuration
pub mod config;

/// HTTP fetch primitive
pub mod http;

/// Retry executor and paginator
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FetchConfig;
pub use error::{Error, Result};
pub use http::{Fetch, FetchRequest, HttpFetcher};
pub use pagination::{PageStream, Paginator, RetryExecutor};
pub use types::{Page, PageItem, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
