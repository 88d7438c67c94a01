//! # pixfeed
//!
//! A paginated image-search feed client: submit a text query, fetch
//! matching images from a Pixabay-style API 40 at a time, merge each page
//! into a growing gallery, and stop cleanly at the end of results.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pixfeed::{FeedConfig, FeedController, HtmlGallery, LogNotifier, PixabayFetcher, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FeedConfig::from_env()?;
//!     let fetcher = PixabayFetcher::new(config)?;
//!     let mut feed = FeedController::new(fetcher, HtmlGallery::new(), LogNotifier);
//!
//!     feed.submit("cats").await?;
//!     while feed.state() == pixfeed::FeedState::Displaying {
//!         feed.load_more().await?;
//!     }
//!
//!     println!("{}", feed.sink().markup());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      FeedController                         │
//! │  submit(query)            load_more()            state()    │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───┬──────────────┬────────────┐
//! │   Session    │     Fetcher      │  RenderSink  │  Notifier  │
//! ├──────────────┼──────────────────┼──────────────┼────────────┤
//! │ query        │ GET page of 40   │ append cards │ success    │
//! │ page counter │ totalHits        │ loading      │ failure    │
//! │ generation   │ one call, no     │ load-more    │ info       │
//! │              │ retry            │ affordance   │            │
//! └──────────────┴──────────────────┴──────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Shared wire records and page math
pub mod types;

/// Configuration for the feed client
pub mod config;

/// HTTP client
pub mod http;

/// Search fetcher over the image API
pub mod fetch;

/// Query session state
pub mod session;

/// Pagination controller (the core state machine)
pub mod controller;

/// Render sink and HTML gallery
pub mod render;

/// Scroll trigger and throttling
pub mod trigger;

/// User notification boundary
pub mod notify;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{FeedConfig, SearchOptions};
pub use controller::{FeedController, FeedState, FeedStats};
pub use error::{Error, Result};
pub use fetch::{PixabayFetcher, SearchFetcher};
pub use notify::{Category, LogNotifier, Notice, Notifier};
pub use render::{HtmlGallery, RenderSink};
pub use session::QuerySession;
pub use trigger::{ScrollTrigger, Throttle, ThrottleConfig, Viewport};
pub use types::{Image, ResultPage, PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
