//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and message dispatch for the
//! review moderation TUI. The review item component decides what each review
//! exposes; the application owns the single-writer view-state store, the
//! reply composer, and the error registry, and commits the transition
//! requests the component returns.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` trait implementation
//! - `review_handlers`: edit/reply interaction and submission handling
//! - `navigation`: cursor movement over the review list
//! - `rendering`: view rendering methods for terminal output

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::config::DEFAULT_REPLY_MAX_LENGTH;
use crate::i18n::{Catalog, EnglishCatalog};
use crate::storefront::models::{Addon, Review, ReviewListing, SiteUser};
use crate::storefront::{InMemoryReplyGateway, ReplyGateway};
use crate::tui::components::ReviewItemContext;
use crate::tui::input::InputContext;
use crate::tui::messages::AppMsg;
use crate::tui::state::{ComposerState, ErrorRegistry, ReviewViewState, ViewStateStore};

mod model_impl;
mod navigation;
mod rendering;
mod review_handlers;

/// Main application model for the review moderation TUI.
#[derive(Debug)]
pub struct ReviewApp {
    /// Add-on the reviews belong to; absent while the listing loads.
    pub(crate) addon: Option<Addon>,
    /// Authenticated viewer, if any.
    pub(crate) site_user: Option<SiteUser>,
    /// Reviews posted against the add-on.
    pub(crate) reviews: Vec<Review>,
    /// Cursor position in the review list.
    pub(crate) cursor: usize,
    /// Single-writer store of per-review view state.
    pub(crate) view_states: ViewStateStore,
    /// Reply draft, present while a composer is open.
    pub(crate) composer: Option<ComposerState>,
    /// Failures from asynchronous submissions, keyed by correlation id.
    pub(crate) errors: ErrorRegistry,
    /// Transient local notice (composer validation messages and the like).
    pub(crate) notice: Option<String>,
    reply_gateway: Arc<dyn ReplyGateway>,
    catalog: Arc<dyn Catalog>,
    reply_max_length: usize,
    width: u16,
    height: u16,
}

impl ReviewApp {
    /// Creates an application seeded from a review listing.
    #[must_use]
    pub fn new(
        listing: ReviewListing,
        reply_gateway: Arc<dyn ReplyGateway>,
        reply_max_length: usize,
    ) -> Self {
        Self {
            addon: Some(listing.addon),
            site_user: listing.viewer,
            reviews: listing.reviews,
            cursor: 0,
            view_states: ViewStateStore::new(),
            composer: None,
            errors: ErrorRegistry::new(),
            notice: None,
            reply_gateway,
            catalog: Arc::new(EnglishCatalog),
            reply_max_length: reply_max_length.max(1),
            width: 80,
            height: 24,
        }
    }

    /// Creates an empty application for the initial loading state.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            addon: None,
            site_user: None,
            reviews: Vec::new(),
            cursor: 0,
            view_states: ViewStateStore::new(),
            composer: None,
            errors: ErrorRegistry::new(),
            notice: None,
            reply_gateway: Arc::new(InMemoryReplyGateway::new(
                crate::storefront::models::ReviewAuthor {
                    id: crate::storefront::models::UserId(0),
                    name: "developer".to_owned(),
                },
            )),
            catalog: Arc::new(EnglishCatalog),
            reply_max_length: DEFAULT_REPLY_MAX_LENGTH,
            width: 80,
            height: 24,
        }
    }

    /// Replaces the message catalogue.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Returns the review under the cursor, if any.
    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.reviews.get(self.cursor)
    }

    /// Returns the view state of the review under the cursor.
    #[must_use]
    pub fn selected_view_state(&self) -> ReviewViewState {
        self.selected_review()
            .map(|review| self.view_states.get(review.id))
            .unwrap_or_default()
    }

    /// Returns the open composer's draft text, for tests and status display.
    #[must_use]
    pub fn composer_text(&self) -> Option<&str> {
        self.composer.as_ref().map(ComposerState::text)
    }

    /// Returns the transient notice, if any.
    #[must_use]
    pub fn notice_message(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Builds the item context for the review under the cursor.
    pub(crate) fn selected_item_context(&self) -> ReviewItemContext<'_> {
        let review = self.selected_review();
        ReviewItemContext {
            review,
            is_reply_to_review_id: None,
            addon: self.addon.as_ref(),
            site_user: self.site_user.as_ref(),
            view_state: review
                .map(|r| self.view_states.get(r.id))
                .unwrap_or_default(),
            composer: self.composer.as_ref(),
            error_handle: None,
        }
    }

    /// Returns the current input context for key mapping.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.composer.is_some() {
            InputContext::Composing
        } else {
            InputContext::Browsing
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function: it commits view-state transition
    /// requests and returns any resulting command.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_composer() {
            return self.handle_composer_msg(msg);
        }
        if msg.is_submission_outcome() {
            return self.handle_submission_outcome(msg);
        }
        match msg {
            AppMsg::BeginEdit => self.handle_begin_edit(),
            AppMsg::CommitEdit => self.handle_commit_edit(),
            AppMsg::BeginReply => self.handle_begin_reply(),
            AppMsg::EscapePressed => self.handle_escape(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => None,
        }
    }

    pub(crate) fn reply_gateway(&self) -> Arc<dyn ReplyGateway> {
        Arc::clone(&self.reply_gateway)
    }

    pub(crate) fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub(crate) const fn reply_max_length(&self) -> usize {
        self.reply_max_length
    }
}
