//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`summary`]: Print the review listing to stdout
//! - [`review_tui`]: Interactive TUI for browsing and replying to reviews

use std::path::Path;

use crate::config::PlauditConfig;
use crate::storefront::error::StorefrontError;
use crate::storefront::fixture;
use crate::storefront::models::ReviewListing;

pub mod review_tui;
pub mod summary;

/// Loads the review listing named by the configuration.
///
/// Falls back to the built-in sample listing when no fixture is configured,
/// and strips the viewer identity when anonymous browsing is requested.
///
/// # Errors
///
/// Returns [`StorefrontError::Fixture`] when the configured fixture cannot
/// be read or parsed.
pub fn load_listing(config: &PlauditConfig) -> Result<ReviewListing, StorefrontError> {
    let mut listing = match config.fixture.as_deref() {
        Some(path) => fixture::load_listing(Path::new(path))?,
        None => fixture::sample_listing(),
    };
    if config.anonymous {
        listing.viewer = None;
    }
    Ok(listing)
}
