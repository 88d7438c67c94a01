//! Common types used throughout pixfeed
//!
//! Shared wire records and page math used across multiple modules.

use serde::{Deserialize, Serialize};

/// Number of images requested per page. The upstream API caps a single
/// response at this many hits.
pub const PAGE_SIZE: u32 = 40;

// ============================================================================
// Image
// ============================================================================

/// A single image hit as reported by the search API.
///
/// Opaque to the pagination controller; it is passed straight through to
/// the render sink. No uniqueness is enforced, so duplicates across pages
/// are possible if the upstream returns overlapping results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Image {
    /// Full-resolution URL, used as the zoom/lightbox target
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Scaled-down URL used for the gallery card
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub downloads: u64,
}

// ============================================================================
// Result Page
// ============================================================================

/// One batch of results for a query, plus the total match count the API
/// reports on every page of the same query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPage {
    /// Hits for this page, in API order. Possibly empty.
    pub items: Vec<Image>,
    /// Total matches across all pages (not cumulative)
    pub total_hits: u64,
}

impl ResultPage {
    /// Create a result page
    pub fn new(items: Vec<Image>, total_hits: u64) -> Self {
        Self { items, total_hits }
    }

    /// Check if this page carries no hits
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages the feed will fetch for this query.
    ///
    /// Computed as `ceil(total_hits / PAGE_SIZE) + 1`. The "+1"
    /// deliberately allows one fetch past the last real page, which
    /// returns zero items. This mirrors the upstream product behavior;
    /// exhaustion is still detected cleanly by page-counter comparison.
    pub fn total_pages(&self) -> u32 {
        (self.total_hits.div_ceil(u64::from(PAGE_SIZE)) + 1) as u32
    }
}
