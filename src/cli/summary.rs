//! Stdout summary of a review listing.
//!
//! The default operation mode: load the listing, print one block per review,
//! and exit. User-authored text is sanitised before it reaches the terminal.

use std::io::{self, Write};

use crate::config::PlauditConfig;
use crate::markup::sanitize;
use crate::storefront::error::StorefrontError;
use crate::storefront::models::Review;

/// Runs the summary mode.
///
/// # Errors
///
/// Returns [`StorefrontError::Fixture`] when the configured fixture cannot be
/// loaded, or [`StorefrontError::Io`] when stdout cannot be written.
pub fn run(config: &PlauditConfig) -> Result<(), StorefrontError> {
    let listing = super::load_listing(config)?;

    let mut stdout = io::stdout().lock();
    let mut output = format!(
        "{} ({} reviews)\n",
        sanitize(&listing.addon.name, &[]).plain_text(),
        listing.reviews.len()
    );
    for review in &listing.reviews {
        output.push('\n');
        output.push_str(&review_block(review));
    }

    writeln!(stdout, "{output}").map_err(|error| StorefrontError::Io {
        message: error.to_string(),
    })
}

fn review_block(review: &Review) -> String {
    let title = review.title.as_deref().unwrap_or("(untitled)");
    let mut block = format!(
        "{} - {}",
        sanitize(title, &[]).plain_text(),
        sanitize(&review.author.name, &[]).plain_text()
    );
    if let Some(rating) = review.rating {
        block.push_str(&format!(" [{}/5]", rating.stars()));
    }
    block.push('\n');
    block.push_str(&sanitize(&review.body, &[]).plain_text());
    block.push('\n');
    if let Some(reply) = review.reply.as_deref() {
        block.push_str(&format!(
            "    Developer response: {}\n",
            sanitize(&reply.body, &[]).plain_text()
        ));
    }
    block
}
