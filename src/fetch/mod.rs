//! Search fetcher
//!
//! The network boundary of the feed: given a query and a page number,
//! return one page of results plus the total match count. One HTTP call
//! per invocation, no internal retry or caching.

mod pixabay;

pub use pixabay::PixabayFetcher;

use crate::error::Result;
use crate::types::ResultPage;
use async_trait::async_trait;

/// Contract consumed by the feed controller.
///
/// Implementations must report the total hit count alongside the items for
/// the requested page, and signal failure as an `Err` distinguishable from
/// a successful empty page.
#[async_trait]
pub trait SearchFetcher: Send + Sync {
    /// Fetch one page of results for the query
    async fn fetch(&self, query: &str, page: u32) -> Result<ResultPage>;
}
