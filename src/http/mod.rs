//! HTTP fetch module
//!
//! The single-request primitive the pagination engine is built on.
//!
//! # Overview
//!
//! - [`Fetch`] - one GET with a timeout, returning the parsed JSON body
//! - [`HttpFetcher`] - reqwest-backed implementation
//!
//! Retrying is not done here; see [`crate::pagination::RetryExecutor`].

mod client;
mod fetch;

pub use client::{HttpFetcher, HttpFetcherConfig};
pub use fetch::{Fetch, FetchRequest};
