//! Pagination controller
//!
//! The core state machine of the feed. Owns the query session, decides
//! when to fetch, merges pages into the view through the render sink,
//! and detects end-of-results by page-counter comparison.
//!
//! # Overview
//!
//! - `submit` starts a new search: validate, clear, fetch page 1.
//! - `load_more` appends the next page while one remains.
//! - Exhaustion compares the pre-fetch page number to the page total
//!   reported by the latest fetch; repeated triggers after exhaustion
//!   are no-ops.
//! - Transport failures are logged and swallowed; the controller returns
//!   to its prior stable state (fail-quiet baseline).
//! - Every fetch carries the session generation it was dispatched under;
//!   outcomes whose generation no longer matches are dropped on arrival.

mod types;

pub use types::{FeedState, FeedStats};

use crate::error::Result;
use crate::fetch::SearchFetcher;
use crate::notify::{Notice, Notifier};
use crate::render::RenderSink;
use crate::session::QuerySession;
use crate::types::ResultPage;
use tracing::{debug, error, trace};

/// Failure notice for a whitespace-only query
pub const MSG_EMPTY_QUERY: &str = "Sorry, search field is empty :(";

/// Failure notice for a query with zero hits
pub const MSG_NO_RESULTS: &str =
    "Sorry, there are no images matching your search query. Please try again.";

/// Info notice once the last page has been fetched
pub const MSG_END_OF_RESULTS: &str =
    "We're sorry, but you've reached the end of search results.";

/// Pagination controller for the image feed
pub struct FeedController<F, S, N> {
    fetcher: F,
    sink: S,
    notifier: N,
    session: QuerySession,
    state: FeedState,
    /// Page total reported by the most recent successful fetch
    total_pages: Option<u32>,
    stats: FeedStats,
}

impl<F, S, N> FeedController<F, S, N>
where
    F: SearchFetcher,
    S: RenderSink,
    N: Notifier,
{
    /// Create a controller wiring the three collaborators together
    pub fn new(fetcher: F, sink: S, notifier: N) -> Self {
        Self {
            fetcher,
            sink,
            notifier,
            session: QuerySession::new(),
            state: FeedState::Idle,
            total_pages: None,
            stats: FeedStats::default(),
        }
    }

    /// Current controller state
    pub fn state(&self) -> FeedState {
        self.state
    }

    /// Query session (read-only)
    pub fn session(&self) -> &QuerySession {
        &self.session
    }

    /// Render sink (read-only)
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Notifier (read-only)
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Statistics
    pub fn stats(&self) -> &FeedStats {
        &self.stats
    }

    /// Page total for the current query, once known
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Start a new search.
    ///
    /// An empty trimmed query produces a failure notice and nothing else:
    /// no fetch, no view mutation, no state change. Otherwise the view is
    /// cleared, the session reset to page 1, and the first page fetched.
    pub async fn submit(&mut self, raw_query: &str) -> Result<()> {
        if self.session.reset(raw_query).is_err() {
            self.notifier.notify(Notice::failure(MSG_EMPTY_QUERY));
            return Ok(());
        }

        self.stats.add_search();
        self.sink.clear();
        self.total_pages = None;

        let prior = std::mem::replace(&mut self.state, FeedState::AwaitingFirstPage);
        let generation = self.session.generation();
        let page = self.session.page();

        let outcome = self.fetcher.fetch(self.session.query(), page).await;
        self.resolve_first_page(generation, prior, page, outcome)
    }

    /// Apply the outcome of a first-page fetch.
    ///
    /// The generation recorded at dispatch decides whether the outcome
    /// still belongs to the current search; anything older is discarded
    /// without touching the view, the notices, or the state machine.
    fn resolve_first_page(
        &mut self,
        generation: u64,
        prior: FeedState,
        page: u32,
        outcome: Result<ResultPage>,
    ) -> Result<()> {
        if generation != self.session.generation() {
            self.drop_stale(generation, page);
            return Ok(());
        }

        match outcome {
            Ok(result) => {
                if result.is_empty() {
                    self.sink.clear();
                    self.notifier.notify(Notice::failure(MSG_NO_RESULTS));
                    self.state = FeedState::Idle;
                    return Ok(());
                }

                self.notifier.notify(Notice::success(format!(
                    "Hooray! We found {} images.",
                    result.total_hits
                )));
                self.render_page(&result);

                let pre_fetch_page = self.session.next_page();
                self.conclude_page(pre_fetch_page, &result);
                Ok(())
            }
            Err(e) => self.handle_fetch_failure(e, prior, page),
        }
    }

    /// Fetch and append the next page.
    ///
    /// Acts only while results are on display. After exhaustion this is an
    /// idempotent no-op: no fetch, no view mutation. Triggers while a
    /// fetch is already in flight, or before any search, are ignored.
    pub async fn load_more(&mut self) -> Result<()> {
        match self.state {
            FeedState::Displaying => {}
            FeedState::Exhausted => {
                trace!("load-more after exhaustion ignored");
                return Ok(());
            }
            other => {
                trace!(state = ?other, "load-more ignored");
                return Ok(());
            }
        }

        self.state = FeedState::AwaitingNextPage;
        self.sink.show_loading();

        let generation = self.session.generation();
        let page = self.session.page();

        let outcome = self.fetcher.fetch(self.session.query(), page).await;
        self.resolve_next_page(generation, page, outcome)
    }

    /// Apply the outcome of a next-page fetch, with the same staleness
    /// check as [`Self::resolve_first_page`].
    fn resolve_next_page(
        &mut self,
        generation: u64,
        page: u32,
        outcome: Result<ResultPage>,
    ) -> Result<()> {
        if generation != self.session.generation() {
            self.drop_stale(generation, page);
            return Ok(());
        }

        match outcome {
            Ok(result) => {
                self.sink.hide_loading();
                self.render_page(&result);

                let pre_fetch_page = self.session.next_page();
                self.conclude_page(pre_fetch_page, &result);
                Ok(())
            }
            // The loading indicator is deliberately left untouched here:
            // the baseline behavior keeps it visible until the next
            // successful page arrives.
            Err(e) => self.handle_fetch_failure(e, FeedState::Displaying, page),
        }
    }

    /// Append a page to the view and re-arm zoom bindings
    fn render_page(&mut self, result: &ResultPage) {
        self.sink.append(&result.items);
        self.sink.refresh_bindings();
        self.stats.add_page(result.items.len());
    }

    /// Decide between `Displaying` and `Exhausted` after a successful
    /// fetch.
    ///
    /// Exhaustion is detected purely by comparing the pre-fetch page
    /// number to the reported page total; a short page alone never ends
    /// the feed early.
    fn conclude_page(&mut self, pre_fetch_page: u32, result: &ResultPage) {
        let total_pages = result.total_pages();
        self.total_pages = Some(total_pages);

        if pre_fetch_page == total_pages {
            self.sink.retire_load_more();
            self.notifier.notify(Notice::info(MSG_END_OF_RESULTS));
            self.state = FeedState::Exhausted;
            debug!(
                query = self.session.query(),
                total_pages, "end of results reached"
            );
        } else {
            self.state = FeedState::Displaying;
        }
    }

    /// Apply the fail-quiet policy to a failed fetch.
    ///
    /// Transport failures are logged and the controller returns to the
    /// prior stable state with no user-visible notice. Anything else is a
    /// programming or configuration problem and propagates.
    fn handle_fetch_failure(
        &mut self,
        e: crate::error::Error,
        prior: FeedState,
        page: u32,
    ) -> Result<()> {
        self.state = prior;
        if e.is_transport() {
            self.stats.add_failure();
            error!(
                query = self.session.query(),
                page,
                error = %e,
                "fetch failed; keeping current view"
            );
            return Ok(());
        }
        Err(e)
    }

    /// Discard a result that arrived after a newer search was accepted
    fn drop_stale(&mut self, generation: u64, page: u32) {
        self.stats.add_stale_drop();
        debug!(
            generation,
            current = self.session.generation(),
            page,
            "dropping stale result from superseded search"
        );
    }
}

impl<F, S, N> std::fmt::Debug for FeedController<F, S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("state", &self.state)
            .field("session", &self.session)
            .field("total_pages", &self.total_pages)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
