//! Pagination module
//!
//! Turns the single-request [`Fetch`](crate::http::Fetch) primitive into a
//! lazily produced, cursor-advancing sequence of pages.
//!
//! # Overview
//!
//! - [`RetryExecutor`] - fetches one page, retrying a bounded number of times
//!   with a fixed delay between attempts
//! - [`Paginator`] - pulls pages one at a time, moving the `tid` cursor to the
//!   last item of each page and pausing between pages
//!
//! The feed ends when a fetched page carries no cursor (its last item has
//! `tid` 0, or it has no items). That page is not yielded.

mod retry;
mod sequencer;

pub use retry::RetryExecutor;
pub use sequencer::{PageStream, Paginator};
