//! Query session state
//!
//! Tracks the current search term and the next page to fetch. The session
//! is a plain value object owned by the feed controller; it is never
//! shared or accessed as ambient state.

use crate::error::{Error, Result};

/// Mutable per-query state for the feed.
///
/// Created once at startup and reused for the life of the session. A new
/// user-initiated search resets the page counter to 1 and bumps the
/// search generation so late arrivals from a previous query can be
/// recognized and dropped.
#[derive(Debug, Clone, Default)]
pub struct QuerySession {
    /// Current normalized (trimmed) search term. Empty means unset.
    query: String,
    /// Next page to fetch, 1-based. Zero until the first accepted reset.
    page: u32,
    /// Monotonically increasing id, bumped on every accepted reset
    generation: u64,
}

impl QuerySession {
    /// Create an unset session
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search.
    ///
    /// Trims the input; rejects a whitespace-only query with
    /// [`Error::EmptyQuery`] and leaves the session untouched. On success
    /// the page counter returns to 1 and the generation advances.
    pub fn reset(&mut self, raw_query: &str) -> Result<()> {
        let trimmed = raw_query.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyQuery);
        }

        self.query = trimmed.to_string();
        self.page = 1;
        self.generation += 1;
        Ok(())
    }

    /// Return the current page, then advance the counter by one.
    ///
    /// Called exactly once per successful fetch.
    pub fn next_page(&mut self) -> u32 {
        let current = self.page;
        self.page += 1;
        current
    }

    /// Current search term (trimmed). Empty until the first reset.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Next page to fetch
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Generation id of the current search
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
