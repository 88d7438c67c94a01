//! Scroll-event throttling
//!
//! Uses the governor crate for token bucket rate limiting: one token per
//! window, leading-edge semantics. The first event in a window passes
//! immediately; the rest are dropped.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for event throttling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Minimum spacing between admitted events
    pub window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_millis(250),
        }
    }
}

impl ThrottleConfig {
    /// Create a throttle config with the given window
    pub fn new(window: Duration) -> Self {
        Self { window }
    }
}

/// Leading-edge token bucket throttle
#[derive(Clone)]
pub struct Throttle {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl Throttle {
    /// Create a throttle with the given config
    pub fn new(config: &ThrottleConfig) -> Self {
        let burst = NonZeroU32::new(1).unwrap();
        let quota = Quota::with_period(config.window)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// Create a throttle with the default 250ms window
    pub fn default_throttle() -> Self {
        Self::new(&ThrottleConfig::default())
    }

    /// Try to admit an event, returning immediately.
    ///
    /// True for the first event in a window, false for the rest.
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Wait until an event would be admitted
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::default_throttle()
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").finish()
    }
}
