//! Review listing fixtures.
//!
//! The demo binary runs without any network: it seeds the application from a
//! JSON listing on disk, falling back to a bundled sample when no fixture is
//! configured.

use std::fs;
use std::path::Path;

use super::error::StorefrontError;
use super::models::ReviewListing;

/// Bundled sample listing used when no fixture path is configured.
const SAMPLE_LISTING: &str = include_str!("sample_listing.json");

/// Loads a review listing from a JSON fixture file.
///
/// # Errors
///
/// Returns [`StorefrontError::Fixture`] when the file cannot be read or the
/// JSON does not describe a valid listing.
pub fn load_listing(path: &Path) -> Result<ReviewListing, StorefrontError> {
    let raw = fs::read_to_string(path).map_err(|error| StorefrontError::Fixture {
        message: format!("{}: {error}", path.display()),
    })?;

    parse_listing(&raw).map_err(|error| StorefrontError::Fixture {
        message: format!("{}: {error}", path.display()),
    })
}

/// Returns the bundled sample listing.
///
/// # Panics
///
/// Panics if the bundled JSON is malformed, which a unit test guards against.
#[must_use]
pub fn sample_listing() -> ReviewListing {
    match parse_listing(SAMPLE_LISTING) {
        Ok(listing) => listing,
        Err(error) => panic!("bundled sample listing is malformed: {error}"),
    }
}

fn parse_listing(raw: &str) -> Result<ReviewListing, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{load_listing, sample_listing};
    use crate::storefront::error::StorefrontError;

    #[test]
    fn bundled_sample_listing_parses() {
        let listing = sample_listing();

        assert!(!listing.reviews.is_empty());
        assert!(listing.viewer.is_some());
    }

    #[test]
    fn missing_fixture_file_reports_its_path() {
        let result = load_listing(Path::new("/nonexistent/listing.json"));

        match result {
            Err(StorefrontError::Fixture { message }) => {
                assert!(message.contains("/nonexistent/listing.json"));
            }
            other => panic!("expected fixture error, got {other:?}"),
        }
    }
}
