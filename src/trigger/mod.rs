//! Scroll trigger
//!
//! Watches viewport geometry and decides when a "load more" event should
//! fire: the viewport must be scrolled exactly to the bottom, and events
//! are rate-capped so continuous scrolling cannot flood the controller.

mod throttle;

pub use throttle::{Throttle, ThrottleConfig};

/// Viewport geometry snapshot, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Distance scrolled from the top of the document
    pub scroll_top: u64,
    /// Height of the visible area
    pub client_height: u64,
    /// Total height of the scrollable document
    pub scroll_height: u64,
}

impl Viewport {
    /// Create a viewport snapshot
    pub fn new(scroll_top: u64, client_height: u64, scroll_height: u64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Whether the viewport sits exactly at the bottom of the document.
    ///
    /// Exact equality, no tolerance band.
    pub fn at_bottom(&self) -> bool {
        self.scroll_top + self.client_height == self.scroll_height
    }
}

/// Bottom-of-viewport detector with throttled invocation
#[derive(Debug)]
pub struct ScrollTrigger {
    throttle: Throttle,
}

impl ScrollTrigger {
    /// Create a trigger with the default 250ms throttle window
    pub fn new() -> Self {
        Self {
            throttle: Throttle::new(&ThrottleConfig::default()),
        }
    }

    /// Create a trigger with a custom throttle
    pub fn with_throttle(throttle: Throttle) -> Self {
        Self { throttle }
    }

    /// Process a scroll event.
    ///
    /// Returns true when the bottom is reached and the throttle admits the
    /// event. Excess events inside the window are coalesced, not queued.
    pub fn observe(&self, viewport: Viewport) -> bool {
        viewport.at_bottom() && self.throttle.try_acquire()
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new()
    }
}
