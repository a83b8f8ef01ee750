//! Correlation-keyed error registry for asynchronous submissions.
//!
//! A reply submission is dispatched fire-and-forget; its failure arrives
//! later as a message. The registry stores such failures keyed by a
//! correlation id, and hands out [`ReplyErrorHandle`] capabilities that a
//! component can query and render without owning the registry.

use std::collections::HashMap;

use crate::storefront::models::ReviewId;
use crate::tui::render::RenderNode;

/// Correlation key tying an outstanding request to a later error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorKey(String);

impl ErrorKey {
    /// Key for the reply submission addressed to `review_id`.
    #[must_use]
    pub fn for_reply(review_id: ReviewId) -> Self {
        Self(format!("reply-for-review-{review_id}"))
    }

    /// Returns the key as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stores asynchronous failures keyed by correlation id.
#[derive(Debug, Clone, Default)]
pub struct ErrorRegistry {
    entries: HashMap<ErrorKey, String>,
}

impl ErrorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `key`, replacing any earlier one.
    pub fn record(&mut self, key: ErrorKey, message: String) {
        self.entries.insert(key, message);
    }

    /// Clears the failure recorded for `key`, if any.
    pub fn clear(&mut self, key: &ErrorKey) {
        self.entries.remove(key);
    }

    /// Returns the failure message for `key`, if one is recorded.
    #[must_use]
    pub fn message(&self, key: &ErrorKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Hands out the error-handler capability for `key`.
    #[must_use]
    pub const fn handle(&self, key: ErrorKey) -> ReplyErrorHandle<'_> {
        ReplyErrorHandle {
            key,
            registry: self,
        }
    }
}

/// Error-handler capability scoped to one correlation key.
#[derive(Debug)]
pub struct ReplyErrorHandle<'a> {
    key: ErrorKey,
    registry: &'a ErrorRegistry,
}

impl ReplyErrorHandle<'_> {
    /// Returns the correlation id this handle is scoped to.
    #[must_use]
    pub fn id(&self) -> &str {
        self.key.as_str()
    }

    /// Returns whether a failure is recorded for this key.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.registry.message(&self.key).is_some()
    }

    /// Renders the recorded failure, or nothing when none exists.
    #[must_use]
    pub fn render_error_if_present(&self) -> Option<RenderNode> {
        self.registry
            .message(&self.key)
            .map(|message| RenderNode::ErrorBanner(message.to_owned()))
    }
}
