//! User notification boundary
//!
//! The controller emits categorized user-facing messages through a generic
//! notifier collaborator; presentation is up to the implementation.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Notice category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Search succeeded (e.g. count of images found)
    Success,
    /// User-recoverable problem (empty query, no results)
    Failure,
    /// Informational (end of results)
    Info,
}

/// A categorized user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Category of the notice
    pub category: Category,
    /// Message text
    pub text: String,
}

impl Notice {
    /// Create a success notice
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            category: Category::Success,
            text: text.into(),
        }
    }

    /// Create a failure notice
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            category: Category::Failure,
            text: text.into(),
        }
    }

    /// Create an info notice
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            category: Category::Info,
            text: text.into(),
        }
    }
}

/// Sink for user-facing notices
pub trait Notifier: Send {
    /// Deliver a notice to the user
    fn notify(&mut self, notice: Notice);

    /// Deliver a success notice
    fn success(&mut self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::success(text));
    }

    /// Deliver a failure notice
    fn failure(&mut self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::failure(text));
    }

    /// Deliver an info notice
    fn info(&mut self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::info(text));
    }
}

/// Notifier that routes notices through tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.category {
            Category::Success | Category::Info => info!(target: "pixfeed::notice", "{}", notice.text),
            Category::Failure => error!(target: "pixfeed::notice", "{}", notice.text),
        }
    }
}
