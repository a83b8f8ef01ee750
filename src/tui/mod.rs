//! Terminal User Interface for moderating add-on reviews.
//!
//! This module provides an interactive TUI for browsing an add-on's reviews
//! and replying to them using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: Render trees in [`render`], assembled by the review item
//!   component and flattened to terminal text
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`components`]: The review item component and its visibility rules
//! - [`input`]: Key-to-message mapping for input handling
//! - [`messages`]: Message types for the update loop
//! - [`render`]: The render-node tree and its terminal flattening
//! - [`state`]: View-state store, composer draft, and error registry
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_listing`] (and optionally [`set_reply_gateway`] and
//! [`set_reply_max_length`]) before starting the program, and
//! `ReviewApp::init()` will automatically retrieve the data.

use std::sync::{Arc, OnceLock};

use crate::storefront::models::{ReviewAuthor, ReviewListing, UserId};
use crate::storefront::{InMemoryReplyGateway, ReplyGateway};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod render;
pub mod state;

pub use app::ReviewApp;

/// Global storage for the initial review listing.
///
/// This is set before the TUI program starts and read by `ReviewApp::init()`.
static INITIAL_LISTING: OnceLock<ReviewListing> = OnceLock::new();

/// Global storage for the reply gateway the application submits through.
static REPLY_GATEWAY: OnceLock<Arc<dyn ReplyGateway>> = OnceLock::new();

/// Global storage for the reply length limit.
static REPLY_MAX_LENGTH: OnceLock<usize> = OnceLock::new();

/// Sets the initial listing for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The listing
/// will be read by `ReviewApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the listing was set, `false` if it was already set.
pub fn set_initial_listing(listing: ReviewListing) -> bool {
    INITIAL_LISTING.set(listing).is_ok()
}

/// Sets the reply gateway for the TUI application.
///
/// Without this, `ReviewApp::init()` falls back to an in-memory gateway so the
/// application remains usable against fixture data.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_reply_gateway(gateway: Arc<dyn ReplyGateway>) -> bool {
    REPLY_GATEWAY.set(gateway).is_ok()
}

/// Sets the reply length limit for the TUI application.
///
/// # Returns
///
/// `true` if the limit was set, `false` if it was already set.
pub fn set_reply_max_length(limit: usize) -> bool {
    REPLY_MAX_LENGTH.set(limit).is_ok()
}

/// Gets a clone of the initial listing from storage.
///
/// Called internally by `ReviewApp::init()`. `OnceLock` does not support
/// consuming the value, so this clones.
pub(crate) fn get_initial_listing() -> Option<ReviewListing> {
    INITIAL_LISTING.get().cloned()
}

/// Gets the reply gateway, falling back to an in-memory one.
pub(crate) fn get_reply_gateway() -> Arc<dyn ReplyGateway> {
    REPLY_GATEWAY.get().map_or_else(
        || {
            let developer = ReviewAuthor {
                id: UserId(0),
                name: "developer".to_owned(),
            };
            Arc::new(InMemoryReplyGateway::new(developer)) as Arc<dyn ReplyGateway>
        },
        Arc::clone,
    )
}

/// Gets the reply length limit, falling back to the configured default.
pub(crate) fn get_reply_max_length() -> usize {
    REPLY_MAX_LENGTH
        .get()
        .copied()
        .unwrap_or(crate::config::DEFAULT_REPLY_MAX_LENGTH)
}
