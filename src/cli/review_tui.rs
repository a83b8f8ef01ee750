//! TUI mode for browsing and replying to reviews.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lets an add-on developer browse reviews and reply to them.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use crate::config::PlauditConfig;
use crate::storefront::error::StorefrontError;
use crate::storefront::models::{ReviewAuthor, ReviewListing};
use crate::storefront::InMemoryReplyGateway;
use crate::tui::{
    set_initial_listing, set_reply_gateway, set_reply_max_length, ReviewApp,
};

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if:
/// - The configured fixture cannot be loaded
/// - The TUI fails to initialise or run
pub async fn run(config: &PlauditConfig) -> Result<(), StorefrontError> {
    let listing = super::load_listing(config)?;

    // Store seed data in global state for Model::init() to retrieve.
    // If already set (e.g. re-running the TUI in the same process), this is
    // a no-op and the existing data remains.
    let _ = set_reply_gateway(reply_gateway_for(&listing));
    let _ = set_reply_max_length(config.reply_limit());
    let _ = set_initial_listing(listing);

    run_tui().await.map_err(|error| StorefrontError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Builds the reply gateway, attributing replies to the listing's developer.
fn reply_gateway_for(listing: &ReviewListing) -> Arc<InMemoryReplyGateway> {
    let developer = listing
        .viewer
        .as_ref()
        .filter(|viewer| viewer.id == listing.addon.developer_id)
        .map_or_else(
            || ReviewAuthor {
                id: listing.addon.developer_id,
                name: "developer".to_owned(),
            },
            |viewer| ReviewAuthor {
                id: viewer.id,
                name: viewer.name.clone(),
            },
        );
    Arc::new(InMemoryReplyGateway::new(developer))
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ReviewApp::init() retrieves seed data from module-level storage.
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
