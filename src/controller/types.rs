//! Feed controller types

use serde::{Deserialize, Serialize};

/// State of the pagination controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedState {
    /// No active search
    #[default]
    Idle,
    /// Page 1 of a new search is in flight
    AwaitingFirstPage,
    /// Results rendered, more pages may remain
    Displaying,
    /// A subsequent page is in flight
    AwaitingNextPage,
    /// All pages for the current query have been fetched
    Exhausted,
}

impl FeedState {
    /// Whether a fetch is currently in flight
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::AwaitingFirstPage | Self::AwaitingNextPage)
    }

    /// Whether the current query has been fully paged through
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Statistics collected over the life of the feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStats {
    /// Searches accepted (non-empty queries)
    pub searches_submitted: u64,
    /// Pages fetched successfully
    pub pages_fetched: u64,
    /// Images handed to the render sink
    pub images_rendered: u64,
    /// Fetches that failed on the transport path
    pub transport_failures: u64,
    /// Results dropped because a newer search superseded them
    pub stale_results_dropped: u64,
}

impl FeedStats {
    /// Record an accepted search
    pub fn add_search(&mut self) {
        self.searches_submitted += 1;
    }

    /// Record a successful page fetch
    pub fn add_page(&mut self, images: usize) {
        self.pages_fetched += 1;
        self.images_rendered += images as u64;
    }

    /// Record a transport failure
    pub fn add_failure(&mut self) {
        self.transport_failures += 1;
    }

    /// Record a stale result discarded on arrival
    pub fn add_stale_drop(&mut self) {
        self.stale_results_dropped += 1;
    }
}
